//! Property-based tests for the path algebra.
//!
//! These run 10 000 cases each and are gated behind the `property-tests`
//! feature. The integration tests carry a lighter version of the same laws.

use proptest::prelude::*;

use super::relationship::PathRelationship;
use super::{
    current, dir, file, parent, parse_dir_path, parse_file_path, parse_path, root, Absolute,
    Directory, File, KindProof, Relative, TypeProof, TypedPath,
};

#[derive(Debug, Clone)]
enum Step {
    Dir(String),
    Parent,
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,10}"
}

fn steps_strategy() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            4 => name_strategy().prop_map(Step::Dir),
            1 => Just(Step::Parent),
        ],
        0..6,
    )
}

fn relative_dir_strategy() -> impl Strategy<Value = TypedPath<Relative, Directory>> {
    steps_strategy().prop_map(|steps| {
        steps.into_iter().fold(current(), |path, step| match step {
            Step::Dir(name) => path / dir(name),
            Step::Parent => path / parent(),
        })
    })
}

fn absolute_dir_strategy() -> impl Strategy<Value = TypedPath<Absolute, Directory>> {
    relative_dir_strategy().prop_map(|rel| root() / rel)
}

fn relative_file_strategy() -> impl Strategy<Value = TypedPath<Relative, File>> {
    (relative_dir_strategy(), name_strategy()).prop_map(|(dir, name)| dir / file(name))
}

fn absolute_file_strategy() -> impl Strategy<Value = TypedPath<Absolute, File>> {
    (absolute_dir_strategy(), name_strategy()).prop_map(|(dir, name)| dir / file(name))
}

// Raw strings mixing names, dots and repeated separators.
fn raw_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(
            prop_oneof![
                Just(String::new()),
                Just(".".to_string()),
                Just("..".to_string()),
                name_strategy(),
            ],
            0..8,
        ),
        any::<bool>(),
    )
        .prop_map(|(leading, parts, trailing)| {
            let mut raw = parts.join("/");
            if leading {
                raw.insert(0, '/');
            }
            if trailing {
                raw.push('/');
            }
            raw
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // serialize(parse(serialize(p))) == serialize(p)
    #[test]
    fn absolute_file_round_trip(path in absolute_file_strategy()) {
        let text = path.serialize();
        let parsed = parse_file_path(&text).expect("serialized file path parses");
        prop_assert_eq!(parsed.serialize(), text);
        prop_assert_eq!(parsed.absolute(), Some(path));
    }

    #[test]
    fn relative_file_round_trip(path in relative_file_strategy()) {
        let parsed = parse_file_path(&path.serialize()).and_then(|p| p.relative());
        prop_assert_eq!(parsed, Some(path));
    }

    #[test]
    fn directory_round_trip(path in absolute_dir_strategy()) {
        let parsed = parse_dir_path(&path.serialize()).and_then(|p| p.absolute());
        prop_assert_eq!(parsed, Some(path));
    }

    // Display of an untyped path reads back as the same node.
    #[test]
    fn untyped_text_round_trip(path in absolute_dir_strategy()) {
        let untyped = path.erase_kind().erase_type();
        let reparsed = parse_path(&untyped.to_string());
        prop_assert_eq!(reparsed, Some(untyped));
    }

    #[test]
    fn join_right_identity(path in absolute_dir_strategy()) {
        prop_assert_eq!(path.clone() / current(), path);
    }

    #[test]
    fn join_left_identity(path in relative_file_strategy()) {
        prop_assert_eq!(current() / path.clone(), path);
    }

    #[test]
    fn join_associative(
        a in absolute_dir_strategy(),
        b in relative_dir_strategy(),
        c in relative_file_strategy(),
    ) {
        let left = (a.clone() / b.clone()) / c.clone();
        let right = a / (b / c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn join_depth_adds(a in absolute_dir_strategy(), b in relative_file_strategy()) {
        let expected = a.depth() + b.depth();
        prop_assert_eq!((a / b).depth(), expected);
    }

    // Narrowing is total on anything the parsers accept.
    #[test]
    fn narrowing_total(raw in raw_strategy()) {
        if let Some(path) = parse_path(&raw) {
            let anchored_at_root = raw.starts_with('/');
            match path.prove_kind() {
                KindProof::Absolute(abs) => {
                    prop_assert!(anchored_at_root);
                    let _ = abs.prove_type();
                }
                KindProof::Relative(rel) => {
                    prop_assert!(!anchored_at_root);
                    let _ = rel.prove_type();
                }
            }
        } else {
            prop_assert!(raw.is_empty());
        }
    }

    #[test]
    fn untyped_parse_agrees_with_typed_parsers(raw in raw_strategy()) {
        if let Some(path) = parse_path(&raw) {
            match path.prove_type() {
                TypeProof::File(f) => prop_assert_eq!(Some(f), parse_file_path(&raw)),
                TypeProof::Directory(d) => prop_assert_eq!(Some(d), parse_dir_path(&raw)),
            }
        }
    }

    #[test]
    fn dir_parser_accepts_all_non_empty(raw in raw_strategy()) {
        prop_assert_eq!(parse_dir_path(&raw).is_some(), !raw.is_empty());
    }

    #[test]
    fn normalize_idempotent(path in absolute_dir_strategy()) {
        let once = path.normalize();
        prop_assert_eq!(once.clone().normalize(), once);
    }

    #[test]
    fn normalized_absolute_has_no_parent_steps(path in absolute_file_strategy()) {
        let text = path.normalize().serialize();
        prop_assert!(!text.split('/').any(|segment| segment == ".."));
    }

    #[test]
    fn relationship_reflexive(path in absolute_dir_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    #[test]
    fn relationship_symmetric(a in absolute_dir_strategy(), b in absolute_dir_strategy()) {
        let forward = PathRelationship::between(&a, &b);
        let backward = PathRelationship::between(&b, &a);

        let is_symmetric = matches!(
            (forward, backward),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );
        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", forward, backward);
    }

    // A base contains anything joined beneath it that does not climb.
    #[test]
    fn join_is_within_base(base in absolute_dir_strategy(), names in prop::collection::vec(name_strategy(), 1..5)) {
        let child = names.into_iter().fold(base.clone(), |path, name| path / dir(name));
        prop_assert_eq!(PathRelationship::between(&base, &child), PathRelationship::Ancestor);
        prop_assert!(PathRelationship::contains(&base, &child));
    }
}
