//! Built-in level layouts.
//!
//! Each level is a handful of rectangles. Ground is what the feet probe
//! stands on, walls are what the side probe slides on. Coordinates are
//! world units with the origin at the level's lower-left area.

use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub name: &'static str,
    pub spawn: Vec2,
    pub ground: Vec<Rect>,
    pub walls: Vec<Rect>,
    pub bananas: Vec<Vec2>,
    /// Exit region and the level it leads to.
    pub exit: Option<(Rect, &'static str)>,
    /// Catalog index the manual reset sends the player to.
    pub respawn: usize,
}

fn block(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_corners(Vec2::new(x, y), Vec2::new(x + w, y + h))
}

fn exit_door(x: f32, y: f32) -> Rect {
    block(x, y, 1.0, 2.0)
}

pub fn builtin() -> Vec<LevelLayout> {
    vec![
        // Run and jump.
        LevelLayout {
            name: "Tutorial_1",
            spawn: Vec2::new(2.0, 2.0),
            ground: vec![
                block(-1.0, 0.0, 14.0, 1.0),
                block(15.0, 0.0, 12.0, 1.0),
                block(8.0, 3.0, 3.0, 0.5),
            ],
            walls: vec![block(-2.0, 0.0, 1.0, 12.0)],
            bananas: vec![],
            exit: Some((exit_door(25.0, 1.0), "Tutorial_2")),
            respawn: 0,
        },
        // A tall wall to climb with wall jumps.
        LevelLayout {
            name: "Tutorial_2",
            spawn: Vec2::new(2.0, 2.0),
            ground: vec![block(-1.0, 0.0, 20.0, 1.0), block(19.0, 9.0, 10.0, 1.0)],
            walls: vec![
                block(-2.0, 0.0, 1.0, 16.0),
                block(12.0, 1.0, 1.0, 8.0),
                block(18.0, 1.0, 1.0, 9.0),
            ],
            bananas: vec![],
            exit: Some((exit_door(27.0, 10.0), "Tutorial_3")),
            respawn: 1,
        },
        // A gap only a dash clears.
        LevelLayout {
            name: "Tutorial_3",
            spawn: Vec2::new(2.0, 2.0),
            ground: vec![block(-1.0, 0.0, 10.0, 1.0), block(15.0, 0.0, 10.0, 1.0)],
            walls: vec![block(-2.0, 0.0, 1.0, 12.0)],
            bananas: vec![Vec2::new(6.0, 1.8)],
            exit: Some((exit_door(23.0, 1.0), "Tutorial_3.5")),
            respawn: 2,
        },
        // Chimney: wall jumps back and forth, one dash to top out.
        LevelLayout {
            name: "Tutorial_3.5",
            spawn: Vec2::new(1.0, 2.0),
            ground: vec![block(-1.0, 0.0, 5.0, 1.0), block(4.0, 16.0, 10.0, 1.0)],
            walls: vec![block(-2.0, 0.0, 1.0, 20.0), block(4.0, 1.0, 1.0, 15.0)],
            bananas: vec![Vec2::new(1.5, 9.0)],
            exit: Some((exit_door(12.0, 17.0), "Tutorial_4")),
            respawn: 3,
        },
        // Everything at once.
        LevelLayout {
            name: "Tutorial_4",
            spawn: Vec2::new(2.0, 2.0),
            ground: vec![
                block(-1.0, 0.0, 8.0, 1.0),
                block(13.0, 4.0, 6.0, 1.0),
                block(25.0, 0.0, 10.0, 1.0),
            ],
            walls: vec![block(-2.0, 0.0, 1.0, 14.0), block(19.0, 5.0, 1.0, 8.0)],
            bananas: vec![Vec2::new(5.0, 1.8), Vec2::new(16.0, 5.8)],
            exit: Some((exit_door(33.0, 1.0), "End")),
            respawn: 4,
        },
        LevelLayout {
            name: "End",
            spawn: Vec2::new(2.0, 2.0),
            ground: vec![block(-1.0, 0.0, 12.0, 1.0)],
            walls: vec![block(-2.0, 0.0, 1.0, 8.0), block(11.0, 0.0, 1.0, 8.0)],
            bananas: vec![],
            exit: None,
            respawn: 5,
        },
    ]
}
