//! Whole-board properties checked against the built-in presets and a few
//! irregular shapes.
//!
//! Run with:
//!     cargo test --test board_properties

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use pegjump_engine::engine::config::{BoardDefinition, PRESETS};
use pegjump_engine::games::peg_solitaire::types::NUM_SIDES;
use pegjump_engine::games::peg_solitaire::{Board, CellKind, Hole, HoleId, PegId};

fn boards() -> Vec<(String, Board)> {
    let mut out: Vec<(String, Board)> = PRESETS
        .iter()
        .map(|(name, def)| (name.to_string(), def.build().unwrap()))
        .collect();
    let irregular = [
        BoardDefinition::from_text(5, 4, &["01110", "11211", "10101", "02120"]),
        BoardDefinition::from_text(6, 2, &["112011", "211102"]),
        BoardDefinition::from_text(1, 1, &["1"]),
    ];
    for (i, def) in irregular.iter().enumerate() {
        out.push((format!("irregular{i}"), def.build().unwrap()));
    }
    out
}

#[test]
fn test_valid_holes_match_mask() {
    for (name, board) in boards() {
        let shape = board.shape();
        let present = shape.count(CellKind::Occupied) + shape.count(CellKind::Empty);
        let holes = board.valid_holes();
        assert_eq!(holes.len(), present, "{name}");

        for hole in &holes {
            let pos = hole.position();
            let expected = pos.x as usize + pos.y as usize * board.width();
            assert_eq!(hole.id(), HoleId(expected), "{name}");
        }
        let ids: Vec<HoleId> = holes.iter().map(|h| h.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted, "{name}: ids must be unique and row-major");
    }
}

#[test]
fn test_adjacency_round_trips() {
    for (name, board) in boards() {
        for hole in board.valid_holes() {
            assert_eq!(hole.arcs().len(), NUM_SIDES);
            for arc in hole.arcs().iter().flatten() {
                let neighbor = board.hole(*arc).unwrap();
                let back = neighbor.side_index_of(hole.id());
                assert!(back.is_some(), "{name}: {arc} does not point back at {}", hole.id());
                // across_from is defined, and lands in line with the two holes
                if let Some(beyond) = neighbor.across_from(hole.id()) {
                    let (a, b, c) = (
                        hole.position(),
                        neighbor.position(),
                        board.hole(beyond).unwrap().position(),
                    );
                    assert_eq!((b.x - a.x, b.y - a.y), (c.x - b.x, c.y - b.y), "{name}");
                }
            }
        }
    }
}

#[test]
fn test_ready_holes_match_definition() {
    for (name, board) in boards() {
        let ready: Vec<HoleId> = board.ready_holes().iter().map(|h| h.id()).collect();
        for hole in board.valid_holes() {
            let has_jump = hole.has_occupant()
                && hole.arcs().iter().flatten().any(|&n| {
                    let neighbor = board.hole(n).unwrap();
                    neighbor.has_occupant()
                        && neighbor
                            .across_from(hole.id())
                            .and_then(|l| board.hole(l))
                            .is_some_and(|l| !l.has_occupant())
                });
            assert_eq!(ready.contains(&hole.id()), has_jump, "{name}: hole {}", hole.id());
        }
    }
}

#[test]
fn test_jumps_conserve_pegs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for (name, mut board) in boards() {
        loop {
            let legal = board.legal_jumps();
            let Some(&mv) = legal.choose(&mut rng) else { break };

            let before = board.peg_count();
            let moving = board.hole(mv.from).and_then(Hole::occupant_id);
            let doomed = board.hole(mv.jumped).and_then(Hole::occupant_id);

            let removed = board.jump_from_to(mv.from, mv.to);
            assert_eq!(removed, doomed, "{name}");
            assert_eq!(board.peg_count(), before - 1, "{name}");
            assert_eq!(board.hole(mv.to).and_then(Hole::occupant_id), moving, "{name}");
            assert!(!board.hole(mv.from).unwrap().has_occupant(), "{name}");
            assert!(!board.hole(mv.jumped).unwrap().has_occupant(), "{name}");

            // every peg id sits in exactly one hole
            let mut pegs: Vec<PegId> = board.occupancy().into_iter().flatten().collect();
            let n = pegs.len();
            pegs.sort();
            pegs.dedup();
            assert_eq!(pegs.len(), n, "{name}");
        }
    }
}

#[test]
fn test_illegal_moves_change_nothing() {
    for (name, mut board) in boards() {
        let before = board.occupancy();
        let legal = board.legal_jumps();
        let ids: Vec<HoleId> = board.valid_holes().iter().map(|h| h.id()).collect();
        for &from in &ids {
            for &to in &ids {
                if legal.iter().any(|m| m.from == from && m.to == to) {
                    continue;
                }
                assert_eq!(board.jump_from_to(from, to), None, "{name}: {from} -> {to}");
            }
        }
        assert_eq!(board.occupancy(), before, "{name}");
    }
}

#[test]
fn test_english_opening_moves() {
    let mut board = PRESETS["english"].build().unwrap();
    // the four pegs two steps from the center can jump into it
    let mut ready: Vec<usize> = board.ready_holes().iter().map(|h| h.id().0).collect();
    ready.sort();
    assert_eq!(ready, vec![10, 22, 26, 38]);

    assert_eq!(board.jump_from_to(HoleId(10), HoleId(24)), Some(PegId(17)));
    assert_eq!(board.peg_count(), 31);
}

#[test]
fn test_point_cloud_counts() {
    let pair = BoardDefinition::from_text(2, 1, &["11"]).build().unwrap();
    assert_eq!(pair.point_cloud().len(), 6);

    // 8x8 corner lattice, less the four untouched points in each cut-away corner
    let english = PRESETS["english"].build().unwrap();
    let cloud = english.point_cloud();
    assert_eq!(cloud.len(), 48);
    for (i, p) in cloud.iter().enumerate() {
        assert!(cloud[i + 1..].iter().all(|q| q != p));
    }
}
