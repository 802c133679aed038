use procgen_core::lsystem::{LSystem, Rule};

const TREE_DEPTH_1: &str = "abcdfbedfabedfcd";

#[test]
fn test_tree_depth_zero_is_axiom() {
    assert_eq!(LSystem::tree().generate(0), "d");
}

#[test]
fn test_tree_depth_one() {
    assert_eq!(LSystem::tree().generate(1), TREE_DEPTH_1);
}

#[test]
fn test_tree_depth_two_expands_only_a_and_d() {
    let expected: String = TREE_DEPTH_1
        .chars()
        .map(|c| match c {
            'a' => "aa".to_string(),
            'd' => TREE_DEPTH_1.to_string(),
            other => other.to_string(),
        })
        .collect();
    let depth_2 = LSystem::tree().generate(2);
    assert_eq!(depth_2, expected);
    // 2 a's -> 4, 4 d's -> 64, 10 fixed symbols
    assert_eq!(depth_2.len(), 78);
}

#[test]
fn test_fixed_symbols_are_identity() {
    let tree = LSystem::tree();
    assert_eq!(tree.rewrite("bcef"), "bcef");
    assert_eq!(tree.rewrite("xyz"), "xyz", "unknown symbols pass through");
}

#[test]
fn test_branch_symbols_stay_balanced() {
    for depth in 0..6 {
        let s = LSystem::tree().generate(depth);
        let saves = s.chars().filter(|&c| c == 'b').count();
        let restores = s.chars().filter(|&c| c == 'f').count();
        assert_eq!(saves, restores, "depth {} unbalanced", depth);
    }
}

#[test]
fn test_later_rule_replaces_earlier() {
    let sys = LSystem::new("x")
        .with_rule(Rule::simple('x', "xy"))
        .with_rule(Rule::simple('x', "z"));
    assert_eq!(sys.generate(1), "z");
    assert_eq!(sys.axiom(), "x");
}

#[test]
fn test_deep_generation_is_iterative() {
    // doubling grammar: 2^20 symbols
    let s = LSystem::placement("g").generate(20);
    assert_eq!(s.len(), 1 << 20);
    assert!(s.chars().all(|c| c == 'g'));
}
