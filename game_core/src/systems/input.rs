use crate::{Controls, Paddle, PaddleIntent, Side};
use hecs::World;

/// Turn the held controls into the human paddle's intent
pub fn ingest_controls(world: &mut World, controls: &Controls, side: Side) {
    let dir = controls.direction();
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config, GameMap};

    #[test]
    fn test_ingest_controls() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let left = create_paddle(&mut world, &config, &map, Side::Left);
        let right = create_paddle(&mut world, &config, &map, Side::Right);

        let controls = Controls {
            up: true,
            ..Controls::new()
        };
        ingest_controls(&mut world, &controls, Side::Left);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 0);

        ingest_controls(&mut world, &Controls::new(), Side::Left);
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
    }
}
