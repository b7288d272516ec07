use dungeon_core::{
    DrawOptions, DungeonGenerator, DungeonMap, Label, MapSession, MapStyle, PointType,
    create_map, generate_batch,
};

use std::collections::{HashMap, HashSet};

const SEEDS: std::ops::RangeInclusive<u32> = 1..=1000;

fn all_options() -> DrawOptions {
    DrawOptions {
        use_keys: true,
        use_patrols: true,
        use_traps: true,
        use_egress: true,
        use_stairs: true,
    }
}

fn draw(seed: u32, options: DrawOptions) -> (DungeonGenerator, DungeonMap) {
    let mut generator = DungeonGenerator::new(800.0, 600.0, Some(seed)).unwrap();
    let map = generator.draw(options).clone();

    (generator, map)
}

fn is_connected(map: &DungeonMap) -> bool {
    let nodes = map.non_blank_indices().collect::<Vec<_>>();
    let Some(first) = nodes.first() else {
        return true;
    };

    let mut seen = HashSet::from([*first]);
    let mut stack = vec![*first];

    while let Some(current) = stack.pop() {
        for edge in &map.edges {
            let next = if edge.from == current {
                edge.to
            } else if edge.to == current {
                edge.from
            } else {
                continue;
            };

            if seen.insert(next) {
                stack.push(next);
            }
        }
    }

    nodes.iter().all(|node| seen.contains(node))
}

#[test]
fn test_same_seed_gives_same_map() {
    for seed in [0, 1, 42, 12345, u32::MAX] {
        let (_, first) = draw(seed, all_options());
        let (_, second) = draw(seed, all_options());

        assert_eq!(first, second, "seed {}", seed);
    }
}

#[test]
fn test_type_multiset_is_fixed() {
    for seed in SEEDS {
        let (_, map) = draw(seed, DrawOptions::default());

        let mut counts = HashMap::new();
        for point in &map.points {
            *counts.entry(point.kind).or_insert(0) += 1;
        }

        assert_eq!(counts.get(&PointType::Feature), Some(&3), "seed {}", seed);
        assert_eq!(counts.get(&PointType::Danger), Some(&2), "seed {}", seed);
        assert_eq!(counts.get(&PointType::Treasure), Some(&1), "seed {}", seed);
        assert_eq!(counts.get(&PointType::Blank), Some(&1), "seed {}", seed);
    }
}

#[test]
fn test_edges_form_connected_planar_graph() {
    for seed in SEEDS {
        let (generator, map) = draw(seed, all_options());

        assert!(!map.edges.is_empty(), "seed {}", seed);
        assert!(map.edges.len() <= 6, "seed {}", seed);
        assert!(is_connected(&map), "seed {}", seed);

        for (idx, edge) in map.edges.iter().enumerate() {
            assert!(!map.points[edge.from].kind.is_blank(), "seed {}", seed);
            assert!(!map.points[edge.to].kind.is_blank(), "seed {}", seed);

            for other in &map.edges[idx + 1..] {
                assert_ne!(edge.edge(), other.edge(), "seed {}", seed);
                assert!(
                    !edge.edge().crosses_with(&other.edge(), generator.points()),
                    "seed {}",
                    seed
                );
            }
        }

        for idx in map.non_blank_indices() {
            assert!(map.degree_of(idx) >= 1, "seed {} point {}", seed, idx);
        }
    }
}

#[test]
fn test_labels_cover_every_non_blank_point() {
    let expected = HashSet::from([
        Label::Start,
        Label::Number(2),
        Label::Number(3),
        Label::Number(4),
        Label::Number(5),
        Label::Goal,
    ]);

    for seed in SEEDS {
        let (_, map) = draw(seed, DrawOptions::default());

        let labels = map
            .points
            .iter()
            .filter_map(|point| point.label)
            .collect::<HashSet<_>>();
        assert_eq!(labels, expected, "seed {}", seed);

        let blank = map.points.iter().find(|point| point.kind.is_blank());
        assert_eq!(blank.and_then(|point| point.label), None, "seed {}", seed);
    }
}

#[test]
fn test_start_links_to_two() {
    for seed in SEEDS {
        let (_, map) = draw(seed, DrawOptions::default());

        let start = map.roles.start.unwrap();
        let two = map.roles.two.unwrap();

        assert!(
            map.edges
                .iter()
                .any(|edge| edge.edge().touches(start) && edge.edge().touches(two)),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_keys_never_sit_on_goal() {
    let mut two_keys = 0;

    for seed in SEEDS {
        let (_, map) = draw(seed, all_options());
        let goal = map.roles.goal.unwrap();

        assert!(map.roles.key1.is_some(), "seed {}", seed);
        assert!(!map.roles.is_key(goal), "seed {}", seed);
        assert_ne!(map.roles.key1, map.roles.key2, "seed {}", seed);
        assert!(map.points[goal].is_locked_goal, "seed {}", seed);

        if map.roles.key2.is_some() {
            two_keys += 1;
        }
    }

    assert!(two_keys > 0 && two_keys < 1000, "two keys {} times", two_keys);
}

#[test]
fn test_egress_and_stairs_avoid_start() {
    for seed in SEEDS {
        let (_, map) = draw(seed, all_options());
        let start = map.roles.start.unwrap();

        assert_eq!(map.entrance.map(|badge| badge.index), Some(start));

        let exit = map.exit.unwrap().index;
        assert_ne!(exit, start, "seed {}", seed);
        assert!(!map.points[exit].kind.is_blank(), "seed {}", seed);

        let stairs = map.stairs.unwrap().index;
        assert_ne!(map.points[stairs].label, Some(Label::Start), "seed {}", seed);
        assert!(!map.points[stairs].kind.is_blank(), "seed {}", seed);
    }
}

#[test]
fn test_edge_decorations_do_not_overlap() {
    for seed in SEEDS {
        let (_, map) = draw(seed, all_options());

        let secrets = map.edges.iter().filter(|edge| edge.is_secret).count();
        let doors = map.edges.iter().filter(|edge| edge.is_door).count();
        assert_eq!(secrets, 1, "seed {}", seed);
        assert!(doors <= 2, "seed {}", seed);

        for edge in &map.edges {
            assert!(!(edge.is_secret && edge.is_door), "seed {}", seed);
            assert!(
                !edge.is_patrol || !(edge.is_secret || edge.is_door),
                "seed {}",
                seed
            );
            assert!(!edge.is_trap || edge.is_door, "seed {}", seed);
        }
    }
}

#[test]
fn test_topology_ignores_canvas_size() {
    for seed in [7, 99, 12345] {
        let mut small = DungeonGenerator::new(120.0, 90.0, Some(seed)).unwrap();
        let mut large = DungeonGenerator::new(1920.0, 1080.0, Some(seed)).unwrap();

        let small = small.draw(all_options()).clone();
        let large = large.draw(all_options()).clone();

        assert_eq!(small.edges, large.edges, "seed {}", seed);
        assert_eq!(small.roles, large.roles, "seed {}", seed);
    }
}

#[test]
fn test_seed_12345_is_stable() {
    let (mut generator, map) = draw(12345, all_options());

    let batch = generate_batch(800.0, 600.0, &[12345], all_options()).unwrap();
    assert_eq!(batch, vec![map.clone()]);

    generator.draw(all_options());
    generator.set_seed(12345);
    assert_eq!(generator.draw(all_options()), &map);
}

#[test]
fn test_session_survives_json() {
    let (generator, map) = draw(31337, all_options());

    let json = serde_json::to_string(&generator.session()).unwrap();
    let session = serde_json::from_str::<MapSession>(&json).unwrap();

    let restored = DungeonGenerator::from_session(800.0, 600.0, &session).unwrap();
    assert_eq!(restored.map(), Some(&map));
}

#[test]
fn test_session_options_default_when_missing() {
    let session = serde_json::from_str::<MapSession>(r#"{"seed": 5}"#).unwrap();

    assert_eq!(session, MapSession::new(5, DrawOptions::default()));
}

#[test]
fn test_create_map_renders_svg() {
    let session = MapSession::new(12345, all_options());

    let document = create_map(500.0, 500.0, &session, MapStyle::Blueprint)
        .unwrap()
        .to_string();

    assert!(document.contains("<svg"));
    assert!(document.contains("viewBox=\"0 0 500 500\""));

    assert!(create_map(-1.0, 500.0, &session, MapStyle::Ink).is_err());
}
