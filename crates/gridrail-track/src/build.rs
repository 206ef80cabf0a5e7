//! The track command grammar.
//!
//! A build walks a cursor through the grid, one character per step:
//!
//! | char | effect |
//! |------|--------|
//! | `s` | straight ahead |
//! | `l` / `r` | quarter turn to the left / right |
//! | `i` / `o` | quarter turn towards / away from the "in" direction |
//! | `u` / `d` | ramp up / down, occupying two tiles |
//! | `g` / `h` | straight with a −1 / +1 helix twist (4-D only) |
//! | `t` | step forward and turn around without laying track |
//! | ` ` | ignored |
//!
//! Every step moves the cursor into the next tile along its heading and
//! lays a segment entering from the tile it came from, so `"ssss"` from
//! `[0, 0, 0]` lays track on `[1, 0, 0]` through `[4, 0, 0]`.

use gridrail_core::{Coord, Dir, TileId};

use crate::error::TrackError;
use crate::graph::TrackGraph;
use crate::segment::Segment;

const NONE: u8 = u8::MAX;

/// Left of a horizontal heading in 3-D, with y up.
const LEFT_3D: [u8; 6] = [5, 4, NONE, NONE, 0, 1];

/// Left of heading `d1` given "in" direction `d2`, in 4-D.
const LEFT_4D: [[u8; 8]; 8] = [
    [NONE, NONE, NONE, NONE, 6, 7, 5, 4],
    [NONE, NONE, NONE, NONE, 7, 6, 4, 5],
    [NONE; 8],
    [NONE; 8],
    [7, 6, NONE, NONE, NONE, NONE, 0, 1],
    [6, 7, NONE, NONE, NONE, NONE, 1, 0],
    [4, 5, NONE, NONE, 1, 0, NONE, NONE],
    [5, 4, NONE, NONE, 0, 1, NONE, NONE],
];

/// One step of the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `s`
    Straight,
    /// `l`
    Left,
    /// `r`
    Right,
    /// `i`
    In,
    /// `o`
    Out,
    /// `u`
    Up,
    /// `d`
    Down,
    /// `g` (−1) and `h` (+1).
    Helix(i8),
    /// `t`
    Reverse,
}

impl Command {
    /// Parse one grammar character. Spaces and unknown characters yield
    /// `None`.
    pub fn parse(c: char) -> Option<Command> {
        Some(match c {
            's' => Command::Straight,
            'l' => Command::Left,
            'r' => Command::Right,
            'i' => Command::In,
            'o' => Command::Out,
            'u' => Command::Up,
            'd' => Command::Down,
            'g' => Command::Helix(-1),
            'h' => Command::Helix(1),
            't' => Command::Reverse,
            _ => return None,
        })
    }
}

/// Where a build left off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Tile the cursor stands on.
    pub tile: TileId,
    /// Its position.
    pub pos: Coord,
    /// Heading.
    pub dir1: Dir,
    /// "In" direction, perpendicular to the heading.
    pub dir2: Dir,
}

impl TrackGraph {
    /// Lay track by walking a cursor from `start` along `commands`.
    ///
    /// `dir1` is the heading and `dir2` the "in" direction; both must be
    /// horizontal and perpendicular. The whole string is parsed before any
    /// track is laid, so an [`InvalidCommand`](TrackError::InvalidCommand)
    /// leaves the graph untouched. After the last command the end tile is
    /// linked to the tile ahead of it when that tile already exists, which
    /// closes loops without creating anything.
    pub fn build(
        &mut self,
        start: &[i32],
        dir1: Dir,
        dir2: Dir,
        commands: &str,
    ) -> Result<Cursor, TrackError> {
        if start.len() != self.dim() {
            return Err(TrackError::DimensionMismatch {
                expected: self.dim(),
                got: start.len(),
            });
        }
        let faces = 2 * self.dim();
        if dir1.is_vertical()
            || dir2.is_vertical()
            || dir1.axis() == dir2.axis()
            || dir1.index() >= faces
            || dir2.index() >= faces
        {
            return Err(TrackError::InvalidCursor { dir1, dir2 });
        }

        let steps = commands
            .chars()
            .enumerate()
            .filter(|(_, c)| *c != ' ')
            .map(|(index, command)| {
                Command::parse(command).ok_or(TrackError::InvalidCommand { command, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut cursor = Cursor {
            tile: self.find_or_create_tile(start),
            pos: Coord::from_slice(start),
            dir1,
            dir2,
        };
        for command in steps {
            self.step(&mut cursor, command)?;
        }

        let mut ahead = cursor.pos.clone();
        cursor.dir1.apply(&mut ahead, 1);
        if let Some(next) = self.tile_at(&ahead) {
            self.link(cursor.tile, next, cursor.dir1);
        }
        log::debug!(
            "built {:?}: cursor at {:?} heading {}, {} tiles",
            commands,
            cursor.pos,
            cursor.dir1,
            self.tile_count()
        );
        Ok(cursor)
    }

    fn step(&mut self, cursor: &mut Cursor, command: Command) -> Result<(), TrackError> {
        let entry = cursor.dir1.opposite();
        cursor.tile = self.advance(cursor.tile, &mut cursor.pos, cursor.dir1);
        match command {
            Command::Reverse => {
                cursor.dir1 = entry;
            }
            Command::Straight => {
                self.add_segment(cursor.tile, Segment::new(entry, cursor.dir1)?)?;
            }
            Command::Helix(helix) => {
                let helix = if self.dim() >= 4 { helix } else { 0 };
                self.add_segment(cursor.tile, Segment::with_helix(entry, cursor.dir1, helix)?)?;
                if let Some((e1, e2)) = cursor.dir1.sideways_basis() {
                    cursor.dir2 = match helix {
                        1 => cursor.dir2.rotate(e1, e2),
                        -1 => cursor.dir2.rotate(e2, e1),
                        _ => cursor.dir2,
                    };
                }
            }
            Command::Left | Command::Right | Command::In | Command::Out => {
                let heading = match command {
                    Command::In => cursor.dir2,
                    Command::Out => cursor.dir2.opposite(),
                    Command::Left => self.left(cursor)?,
                    _ => self.left(cursor)?.opposite(),
                };
                self.add_segment(cursor.tile, Segment::new(entry, heading)?)?;
                cursor.dir2 = cursor.dir2.rotate(cursor.dir1, heading);
                cursor.dir1 = heading;
            }
            Command::Up | Command::Down => {
                let vertical = if command == Command::Up {
                    Dir::UP
                } else {
                    Dir::DOWN
                };
                self.add_segment(cursor.tile, Segment::new(entry, vertical)?)?;
                cursor.tile = self.advance(cursor.tile, &mut cursor.pos, vertical);
                self.add_segment(
                    cursor.tile,
                    Segment::new(vertical.opposite(), cursor.dir1)?,
                )?;
            }
        }
        Ok(())
    }

    fn left(&self, cursor: &Cursor) -> Result<Dir, TrackError> {
        let raw = match self.dim() {
            3 => LEFT_3D.get(cursor.dir1.index()).copied(),
            _ => LEFT_4D
                .get(cursor.dir1.index())
                .and_then(|row| row.get(cursor.dir2.index()))
                .copied(),
        };
        match raw {
            Some(d) if d != NONE => Ok(Dir(d)),
            _ => Err(TrackError::InvalidCursor {
                dir1: cursor.dir1,
                dir2: cursor.dir2,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackConfig;
    use proptest::prelude::*;

    const PX: Dir = Dir(0);
    const NX: Dir = Dir(1);
    const PZ: Dir = Dir(4);
    const NZ: Dir = Dir(5);
    const PW: Dir = Dir(6);

    fn graph(dim: usize) -> TrackGraph {
        TrackGraph::new(TrackConfig {
            dim,
            switch_seed: 0,
        })
        .unwrap()
    }

    #[test]
    fn left_tables_are_perpendicular() {
        for d1 in [0u8, 1, 4, 5] {
            let l = Dir(LEFT_3D[d1 as usize]);
            assert!(!l.is_vertical());
            assert_ne!(l.axis(), Dir(d1).axis());
            assert_eq!(Dir(LEFT_3D[l.index()]), Dir(d1).opposite());
        }
        for d1 in Dir::all(4).filter(|d| !d.is_vertical()) {
            for d2 in Dir::all(4).filter(|d| !d.is_vertical() && d.axis() != d1.axis()) {
                let l = Dir(LEFT_4D[d1.index()][d2.index()]);
                assert!(!l.is_vertical());
                assert_ne!(l.axis(), d1.axis());
                assert_ne!(l.axis(), d2.axis());
                // Left of the left turn, with the same "in", faces backwards.
                assert_eq!(Dir(LEFT_4D[l.index()][d2.index()]), d1.opposite());
                // Flipping "in" flips left.
                assert_eq!(Dir(LEFT_4D[d1.index()][d2.opposite().index()]), l.opposite());
            }
        }
    }

    #[test]
    fn straight_line_lands_one_tile_per_command() {
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "s s s s").unwrap();
        assert_eq!(c.pos.as_slice(), &[4, 0, 0]);
        assert_eq!((c.dir1, c.dir2), (PX, PZ));
        assert_eq!(g.tile_count(), 5);
        assert!(g.segments_at(&[0, 0, 0]).is_empty());
        for x in 1..=4 {
            let segs = g.segments_at(&[x, 0, 0]);
            assert_eq!(segs.len(), 1);
            assert!(segs[0].is_straight());
        }
    }

    #[test]
    fn square_loop_closes_on_itself() {
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "rrrr").unwrap();
        assert_eq!(c.pos.as_slice(), &[0, 0, 0]);
        assert_eq!(c.dir1, PX);
        assert_eq!(g.tile_count(), 4);
        // Every tile is a curve with both neighbors linked.
        for (id, tile) in g.iter() {
            let seg = tile.segments()[0];
            assert!(!seg.is_straight());
            for end in [seg.from_dir(), seg.to_dir()] {
                let n = g.neighbor(id, end).unwrap();
                assert_eq!(g.neighbor(n, end.opposite()), Some(id));
            }
        }
    }

    #[test]
    fn right_turn_goes_towards_negative_z_from_plus_x() {
        // Heading +x with y up, left is -z.
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "l").unwrap();
        assert_eq!(c.dir1, NZ);
        assert_eq!(g.segments_at(&[1, 0, 0]), &[Segment::new(NX, NZ).unwrap()]);
        let c = g.build(&[0, 0, 5], PX, PZ, "r").unwrap();
        assert_eq!(c.dir1, PZ);
    }

    #[test]
    fn in_and_out_turns_update_both_directions() {
        let mut g = graph(4);
        let c = g.build(&[0, 0, 0, 0], PX, PW, "i").unwrap();
        assert_eq!((c.dir1, c.dir2), (PW, NX));
        let c = g.build(&[0, 0, 5, 0], PX, PW, "o").unwrap();
        assert_eq!((c.dir1, c.dir2), (PW.opposite(), PX));
    }

    #[test]
    fn reverse_twice_returns_without_track() {
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "tt").unwrap();
        assert_eq!(c.pos.as_slice(), &[0, 0, 0]);
        assert_eq!(c.dir1, PX);
        assert!(g.iter().all(|(_, t)| t.segments().is_empty()));
    }

    #[test]
    fn ramp_up_uses_two_tiles() {
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "us").unwrap();
        assert_eq!(c.pos.as_slice(), &[2, 1, 0]);
        assert_eq!(g.segments_at(&[1, 0, 0]), &[Segment::new(NX, Dir::UP).unwrap()]);
        assert_eq!(g.segments_at(&[1, 1, 0]), &[Segment::new(Dir::DOWN, PX).unwrap()]);
        assert!(g.segments_at(&[1, 0, 0])[0].is_ramp_bottom());
        assert!(g.segments_at(&[1, 1, 0])[0].is_ramp_top());
    }

    #[test]
    fn ramp_down_uses_two_tiles() {
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "ds").unwrap();
        assert_eq!(c.pos.as_slice(), &[2, -1, 0]);
        assert_eq!((c.dir1, c.dir2), (PX, PZ));
        assert_eq!(g.segments_at(&[1, 0, 0]), &[Segment::new(NX, Dir::DOWN).unwrap()]);
        assert_eq!(g.segments_at(&[1, -1, 0]), &[Segment::new(Dir::UP, PX).unwrap()]);
        assert!(g.segments_at(&[1, 0, 0])[0].is_ramp_top());
        assert!(g.segments_at(&[1, -1, 0])[0].is_ramp_bottom());
        assert!(g.segments_at(&[2, -1, 0])[0].is_straight());

        let upper = g.tile_at(&[1, 0, 0]).unwrap();
        let lower = g.tile_at(&[1, -1, 0]).unwrap();
        assert_eq!(g.neighbor(upper, Dir::DOWN), Some(lower));
        assert_eq!(g.neighbor(lower, Dir::UP), Some(upper));
    }

    #[test]
    fn helix_is_dropped_in_three_dimensions() {
        let mut g = graph(3);
        g.build(&[0, 0, 0], PX, PZ, "h").unwrap();
        assert_eq!(g.segments_at(&[1, 0, 0])[0].helix(), 0);
    }

    #[test]
    fn helix_twists_in_direction_in_four_dimensions() {
        let mut g = graph(4);
        let (e1, e2) = PX.sideways_basis().unwrap();
        let c = g.build(&[0, 0, 0, 0], PX, e1, "h").unwrap();
        assert_eq!(c.dir2, e2);
        assert_eq!(g.segments_at(&[1, 0, 0, 0])[0].helix(), 1);
        let c = g.build(&[0, 0, 0, 5], PX, e1, "g").unwrap();
        assert_eq!(c.dir2, e2.opposite());
    }

    #[test]
    fn conflicting_helix_is_rejected() {
        let mut g = graph(4);
        g.build(&[0, 0, 0, 0], PX, PW, "h").unwrap();
        let err = g.build(&[0, 0, 0, 0], PX, PW, "g").unwrap_err();
        assert!(matches!(err, TrackError::IncompatibleSegment { .. }));
    }

    #[test]
    fn ramp_over_level_track_is_rejected() {
        let mut g = graph(3);
        g.build(&[0, 0, 0], PX, PZ, "ss").unwrap();
        let err = g.build(&[1, 0, 1], NZ, PX, "u").unwrap_err();
        assert!(matches!(err, TrackError::IncompatibleSegment { .. }));
    }

    #[test]
    fn invalid_command_leaves_graph_untouched() {
        let mut g = graph(3);
        let err = g.build(&[0, 0, 0], PX, PZ, "ss x").unwrap_err();
        assert_eq!(
            err,
            TrackError::InvalidCommand {
                command: 'x',
                index: 3
            }
        );
        assert_eq!(g.tile_count(), 0);
    }

    #[test]
    fn cursor_must_be_horizontal_and_perpendicular() {
        let mut g = graph(3);
        for (d1, d2) in [(Dir::UP, PX), (PX, NX), (PX, Dir::DOWN), (PW, PX)] {
            assert_eq!(
                g.build(&[0, 0, 0], d1, d2, "s"),
                Err(TrackError::InvalidCursor { dir1: d1, dir2: d2 })
            );
        }
        assert!(matches!(
            g.build(&[0, 0], PX, PZ, "s"),
            Err(TrackError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn end_link_never_creates_tiles() {
        let mut g = graph(3);
        let c = g.build(&[0, 0, 0], PX, PZ, "ss").unwrap();
        assert_eq!(g.neighbor(c.tile, PX), None);
        assert_eq!(g.tile_count(), 3);
    }

    fn command_string() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!['s', 'l', 'r', 'i', 'o']), 1..40)
            .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn level_commands_create_at_most_one_tile_each(commands in command_string()) {
            let mut g = graph(4);
            // Self-intersections may collide with incompatible pieces; only
            // successful builds are checked.
            if g.build(&[0, 0, 0, 0], PX, PW, &commands).is_ok() {
                prop_assert!(g.tile_count() <= commands.len() + 1);
            }
        }

        #[test]
        fn links_are_mutual(commands in command_string()) {
            let mut g = graph(3);
            let _ = g.build(&[0, 0, 0], PX, PZ, &commands);
            for (id, tile) in g.iter() {
                for d in Dir::all(3) {
                    if let Some(n) = tile.neighbor(d) {
                        prop_assert_eq!(g.neighbor(n, d.opposite()), Some(id));
                        let mut p = Coord::from_slice(tile.pos());
                        d.apply(&mut p, 1);
                        prop_assert_eq!(g.tile(n).pos(), p.as_slice());
                    }
                }
            }
        }
    }
}
