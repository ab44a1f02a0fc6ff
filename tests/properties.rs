//! Property tests over random instances and random feasible orders.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_jobshop::descent::{DescentConfig, DescentRunner, ExitCause};
use u_jobshop::dispatching::{GreedyDispatcher, PriorityRule};
use u_jobshop::models::{Instance, JobSequence, MachineOrder};
use u_jobshop::neighborhood::{blocks_of, critical_path};
use u_jobshop::scheduler::simulate;

/// Random instance plus a random feasible order, both from one seed.
fn setup(seed: u64, jobs: usize, machines: usize, max_duration: i64) -> (Instance, MachineOrder) {
    let mut rng = StdRng::seed_from_u64(seed);
    let instance = Instance::random(jobs, machines, max_duration, &mut rng).unwrap();
    let order = JobSequence::random(&instance, &mut rng).to_machine_order(&instance);
    (instance, order)
}

fn config() -> DescentConfig {
    DescentConfig::default()
        .with_time_limit(Duration::from_secs(30))
        .with_deadline_check_per_neighbor(false)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_simulation_is_deterministic(
        seed in any::<u64>(), jobs in 1usize..7, machines in 1usize..6, max_d in 0i64..20,
    ) {
        let (inst, order) = setup(seed, jobs, machines, max_d);
        prop_assert_eq!(simulate(&inst, &order).unwrap(), simulate(&inst, &order).unwrap());
    }

    #[test]
    fn test_schedule_respects_both_orders(
        seed in any::<u64>(), jobs in 1usize..7, machines in 1usize..6, max_d in 0i64..20,
    ) {
        let (inst, order) = setup(seed, jobs, machines, max_d);
        let schedule = simulate(&inst, &order).unwrap();

        for op in inst.operations() {
            let a = schedule.assignment(op);
            prop_assert_eq!(a.end - a.start, inst.duration_of(op));
            prop_assert!(a.start >= 0);
            if let Some(pred) = op.job_predecessor() {
                prop_assert!(a.start >= schedule.completion(pred));
            }
        }
        for m in 0..inst.num_machines() {
            for pair in order.sequence(m).windows(2) {
                prop_assert!(schedule.start(pair[1]) >= schedule.completion(pair[0]));
            }
        }
    }

    #[test]
    fn test_makespan_dominates_job_and_machine_sums(
        seed in any::<u64>(), jobs in 1usize..7, machines in 1usize..6, max_d in 0i64..20,
    ) {
        let (inst, order) = setup(seed, jobs, machines, max_d);
        let makespan = simulate(&inst, &order).unwrap().makespan();
        for j in 0..inst.num_jobs() {
            prop_assert!(makespan >= inst.job_duration(j));
        }
        for m in 0..inst.num_machines() {
            prop_assert!(makespan >= inst.machine_load(m));
        }
    }

    #[test]
    fn test_critical_path_is_tight_chain(
        seed in any::<u64>(), jobs in 1usize..7, machines in 1usize..6, max_d in 0i64..20,
    ) {
        let (inst, order) = setup(seed, jobs, machines, max_d);
        let schedule = simulate(&inst, &order).unwrap();
        let path = critical_path(&inst, &order, &schedule).unwrap();

        prop_assert_eq!(schedule.start(path[0]), 0);
        prop_assert_eq!(schedule.completion(*path.last().unwrap()), schedule.makespan());
        for pair in path.windows(2) {
            prop_assert_eq!(schedule.completion(pair[0]), schedule.start(pair[1]));
            let same_job = pair[0].job == pair[1].job && pair[0].step + 1 == pair[1].step;
            let machine = inst.machine_of(pair[1]);
            let same_machine = order.machine_predecessor(machine, pair[1]) == Some(pair[0]);
            prop_assert!(same_job || same_machine);
        }
        let total: i64 = path.iter().map(|&op| inst.duration_of(op)).sum();
        prop_assert_eq!(total, schedule.makespan());
    }

    #[test]
    fn test_blocks_are_maximal_machine_runs(
        seed in any::<u64>(), jobs in 1usize..7, machines in 1usize..6, max_d in 0i64..20,
    ) {
        let (inst, order) = setup(seed, jobs, machines, max_d);
        let schedule = simulate(&inst, &order).unwrap();
        let path = critical_path(&inst, &order, &schedule).unwrap();
        let blocks = blocks_of(&inst, &order, &path);

        let mut cursor = 0;
        for block in &blocks {
            prop_assert!(block.len() >= 2);
            let ops = &order.sequence(block.machine)[block.first..=block.last];
            let at = path[cursor..].iter().position(|&op| op == ops[0]).unwrap() + cursor;
            prop_assert_eq!(&path[at..at + ops.len()], ops);
            if at > 0 {
                prop_assert_ne!(inst.machine_of(path[at - 1]), block.machine);
            }
            if let Some(&after) = path.get(at + ops.len()) {
                prop_assert_ne!(inst.machine_of(after), block.machine);
            }
            cursor = at + ops.len();
        }
    }

    #[test]
    fn test_descent_strictly_decreases_and_converges(
        seed in any::<u64>(), jobs in 1usize..6, machines in 1usize..5, max_d in 0i64..20,
    ) {
        let (inst, order) = setup(seed, jobs, machines, max_d);
        let initial = simulate(&inst, &order).unwrap().makespan();
        let result = DescentRunner::run(&inst, order, &config()).unwrap();

        prop_assert_eq!(result.exit_cause, ExitCause::Converged);
        prop_assert_eq!(result.makespan_history[0], initial);
        prop_assert!(result.makespan_history.windows(2).all(|w| w[1] < w[0]));
        prop_assert_eq!(*result.makespan_history.last().unwrap(), result.makespan());
        prop_assert!(result.makespan() >= inst.lower_bound());
        prop_assert_eq!(simulate(&inst, &result.order).unwrap(), result.schedule);
    }

    #[test]
    fn test_every_rule_dispatches_feasibly(
        seed in any::<u64>(), jobs in 1usize..7, machines in 1usize..6, max_d in 0i64..20,
    ) {
        let (inst, _) = setup(seed, jobs, machines, max_d);
        for rule in PriorityRule::ALL {
            let order = GreedyDispatcher::new(rule).dispatch_order(&inst);
            prop_assert!(order.validate(&inst).is_ok());
            prop_assert!(simulate(&inst, &order).is_ok());
        }
    }
}

#[test]
fn test_independent_runs_across_threads() {
    let mut rng = StdRng::seed_from_u64(11);
    let instance = Instance::random(8, 5, 25, &mut rng).unwrap();
    let expected = DescentRunner::solve(&instance, &config()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let instance = instance.clone();
            std::thread::spawn(move || DescentRunner::solve(&instance, &config()).unwrap())
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.order, expected.order);
        assert_eq!(result.makespan_history, expected.makespan_history);
    }
}

#[test]
fn test_result_serializes() {
    let instance = Instance::from_pairs(2, &[&[(0, 3), (1, 2)], &[(1, 2), (0, 2)]]).unwrap();
    let result = DescentRunner::solve(&instance, &config()).unwrap();
    let json = serde_json::to_string(&result.schedule).unwrap();
    let back: u_jobshop::models::Schedule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result.schedule);
    assert_eq!(serde_json::to_string(&result.exit_cause).unwrap(), "\"Converged\"");
}
