mod common;

use common::{Arena, OPEN_ROOM, WINDING_MAZE, init_tracing};
use goodies::{Goody, GoodyKind, MattGoody, MattPhase, RandomGoody, StaticGoody};
use maze_core::{AgentId, AgentRole, Move, PcgRng, Position, derive_seed};

const MATT: AgentId = AgentId(1);
const TARGET: AgentId = AgentId(2);
const BADDY: AgentId = AgentId(3);

fn play_turn<G: Goody>(arena: &mut Arena, id: AgentId, goody: &mut G) -> Move {
    let obstruction = arena.obstruction(id);
    let ping = arena.ping_for(id);
    let mv = goody
        .take_turn(obstruction, ping.as_ref())
        .unwrap_or_else(|err| panic!("{id} failed its turn: {err}"));
    arena.apply(id, mv);
    mv
}

#[test]
fn matt_catches_static_goody_in_open_room() {
    init_tracing();
    let start = Position::new(1, 1);
    let mut arena = Arena::parse(OPEN_ROOM);
    arena.spawn(MATT, AgentRole::Goody, start);
    arena.spawn(TARGET, AgentRole::Goody, Position::new(5, 4));
    arena.spawn(BADDY, AgentRole::Baddy, Position::new(14, 1));

    let mut matt = MattGoody::new(PcgRng::seeded(derive_seed(7, MATT)));
    let mut target = StaticGoody;

    let mut caught_on = None;
    for turn in 0..30 {
        play_turn(&mut arena, MATT, &mut matt);
        play_turn(&mut arena, TARGET, &mut target);
        arena.end_turn();

        assert_eq!(matt.position(), arena.position(MATT) - start);
        if arena.position(MATT) == arena.position(TARGET) {
            caught_on = Some(turn);
            break;
        }
    }

    // One ping to find the target, one forced re-ping when the fix goes stale.
    assert_eq!(caught_on, Some(8));
    assert_eq!(matt.ally_target(), Some(Position::new(4, 3)));
}

#[test]
fn matt_bookkeeping_follows_engine_through_maze() {
    init_tracing();
    let start = Position::new(1, 1);
    let mut arena = Arena::parse(WINDING_MAZE);
    arena.spawn(MATT, AgentRole::Goody, start);
    arena.spawn(TARGET, AgentRole::Goody, Position::new(9, 1));
    arena.spawn(BADDY, AgentRole::Baddy, Position::new(5, 5));

    let mut matt = MattGoody::new(PcgRng::seeded(derive_seed(42, MATT)));
    let mut target = StaticGoody;

    let mut pings = 0;
    for turn in 0..80 {
        if play_turn(&mut arena, MATT, &mut matt) == Move::Ping {
            pings += 1;
        }
        play_turn(&mut arena, TARGET, &mut target);
        arena.end_turn();

        assert_eq!(matt.position(), arena.position(MATT) - start);
        if turn > 0 {
            assert_ne!(matt.phase(), MattPhase::AwaitingFirstPing);
        }
    }

    assert!(pings > 1, "stale fixes should force repeated pings");
    // (0, 0) relative is the maze corner (1, 1): two walls, so not a dead end.
    assert!(!matt.dead_ends().contains(&Position::ORIGIN));
}

#[test]
fn random_goody_never_bumps_into_walls() {
    init_tracing();
    let mut arena = Arena::parse(WINDING_MAZE);
    arena.spawn(TARGET, AgentRole::Goody, Position::new(1, 1));
    arena.spawn(BADDY, AgentRole::Baddy, Position::new(9, 7));

    let mut walker = RandomGoody::new(PcgRng::seeded(2024));
    let mut moved = false;
    let mut pinged = false;
    for _ in 0..500 {
        match play_turn(&mut arena, TARGET, &mut walker) {
            Move::Ping => pinged = true,
            Move::Stay => panic!("random goody never stays"),
            _ => moved = true,
        }
        arena.end_turn();
    }

    assert!(moved && pinged);
    assert!(arena.is_floor(arena.position(TARGET)));
}

#[test]
fn roster_built_from_names_plays_together() {
    init_tracing();
    let mut arena = Arena::parse(OPEN_ROOM);
    let roster = [
        ("matt", AgentId(1), Position::new(1, 1)),
        ("random", AgentId(2), Position::new(8, 3)),
        ("static", AgentId(3), Position::new(12, 5)),
    ];
    let mut goodies: Vec<(AgentId, Box<dyn Goody>)> = roster
        .iter()
        .map(|(name, id, at)| {
            arena.spawn(*id, AgentRole::Goody, *at);
            let kind: GoodyKind = name.parse().expect("known goody");
            (*id, kind.build(derive_seed(99, *id)))
        })
        .collect();
    arena.spawn(AgentId(4), AgentRole::Baddy, Position::new(14, 6));

    for _ in 0..60 {
        for (id, goody) in goodies.iter_mut() {
            play_turn(&mut arena, *id, goody);
        }
        arena.end_turn();
    }

    assert_eq!(arena.position(AgentId(3)), Position::new(12, 5));
    assert_eq!(goodies[0].1.kind(), GoodyKind::Matt);
}
