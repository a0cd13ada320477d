use test_case::test_case;

use crate::config::ManagerConfig;
use crate::error::Error;
use crate::level::OptimizationLevel;
use crate::level::TransformerLevel::{Level1, Level2, Level3};
use crate::manager::TransformerManager;
use crate::pipeline::apply_optimization_level;
use crate::test::helpers::{Behavior, Scripted, TestGraph, manager_with};

fn three_level_manager() -> TransformerManager<TestGraph> {
    // Registered out of level order on purpose.
    manager_with(
        4,
        [
            (Scripted::new("l3", Behavior::Identity), Level3),
            (Scripted::new("l1", Behavior::Times(1)), Level1),
            (Scripted::new("l2", Behavior::Identity), Level2),
        ],
    )
}

#[test_case(OptimizationLevel::DisableAll, &[]; "disable_all")]
#[test_case(OptimizationLevel::Basic, &["l1", "l1"]; "basic")]
#[test_case(OptimizationLevel::Extended, &["l1", "l1", "l2"]; "extended")]
#[test_case(OptimizationLevel::All, &["l1", "l1", "l2", "l3"]; "all")]
fn test_levels_applied_in_ascending_order(optimization_level: OptimizationLevel, expected: &[&str]) {
    let manager = three_level_manager();
    let mut graph = TestGraph::default();

    let reports = apply_optimization_level(&manager, &mut graph, optimization_level).unwrap();

    assert_eq!(graph.trace(), expected);
    let levels: Vec<_> = reports.iter().map(|r| r.level).collect();
    assert_eq!(levels, optimization_level.transformer_levels().collect::<Vec<_>>());
    assert!(reports.iter().all(|r| r.converged));
}

#[test]
fn test_stops_at_first_failing_level() {
    let manager = manager_with(
        4,
        [
            (Scripted::new("ok", Behavior::Identity), Level1),
            (Scripted::new("bad", Behavior::Fail), Level2),
            (Scripted::new("never", Behavior::Identity), Level3),
        ],
    );
    let mut graph = TestGraph::default();

    let err = apply_optimization_level(&manager, &mut graph, OptimizationLevel::All).unwrap_err();

    assert!(matches!(err, Error::TransformerFailed { ref name, .. } if name == "bad"));
    assert_eq!(graph.trace(), vec!["ok", "bad"]);
}

#[test]
fn test_requires_init_even_when_disabled() {
    let manager = TransformerManager::<TestGraph>::new();
    let mut graph = TestGraph::default();

    let err = apply_optimization_level(&manager, &mut graph, OptimizationLevel::DisableAll).unwrap_err();
    assert!(matches!(err, Error::NotInitialized));
}

#[test]
fn test_with_config_initializes_manager() {
    let config = ManagerConfig::builder()
        .iteration_bound(std::num::NonZeroU32::new(2).unwrap())
        .optimization_level(OptimizationLevel::Extended)
        .build();
    let mut manager = TransformerManager::with_config(&config).unwrap();
    assert!(manager.is_initialized());
    assert_eq!(manager.iteration_bound(), Some(config.iteration_bound));

    manager.register(Scripted::new("spin", Behavior::Always).boxed(), Level2).unwrap();
    assert!(matches!(manager.init(7), Err(Error::AlreadyInitialized { iteration_bound: 2 })));

    let mut graph = TestGraph::default();
    let reports = apply_optimization_level(&manager, &mut graph, config.optimization_level).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].rounds, 0);
    assert_eq!(reports[1].rounds, 2);
    assert!(!reports[1].converged);
}
