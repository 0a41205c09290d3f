use hospital_finance::engines::metrics::{
    approval_rate, budget_utilization, cost_per_patient, coverage_impact, department_rankings,
    efficiency, hospital_metrics, profitability, revenue_per_patient, treatment_savings,
    weighted_average_cost,
};
use hospital_finance::types::{Department, HospitalMetrics, WeightedCost};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn dept(name: &str, budget: f64, revenue: f64, patients: u64) -> Department {
    Department {
        name: name.to_string(),
        budget,
        cost_overruns: 0.0,
        patient_load: patients,
        revenue_generated: revenue,
    }
}

fn random_departments(rng: &mut StdRng, count: usize) -> Vec<Department> {
    (0..count)
        .map(|i| Department {
            name: format!("Dept{}", i),
            budget: rng.gen_range(0..5) as f64 * 250_000.0,
            cost_overruns: rng.gen_range(-10.0..25.0),
            patient_load: rng.gen_range(0..3_000),
            revenue_generated: rng.gen_range(0..6) as f64 * 200_000.0,
        })
        .collect()
}

#[test]
fn test_efficiency_formula_and_zero_budget() {
    assert_eq!(efficiency(150.0, 100.0), 50.0);
    assert_eq!(efficiency(90.0, 100.0), -10.0);
    assert_eq!(efficiency(1_000.0, 0.0), 0.0);
}

#[test]
fn test_per_patient_zero_load() {
    assert_eq!(cost_per_patient(5_000_000.0, 0), 0.0);
    assert_eq!(revenue_per_patient(6_000_000.0, 0), 0.0);
}

#[test]
fn test_profitability_zero_revenue() {
    assert_eq!(profitability(0.0, 100.0), 0.0);
    assert_eq!(profitability(0.0, 0.0), 0.0);
}

#[test]
fn test_weighted_average_cost() {
    assert_eq!(weighted_average_cost::<WeightedCost>(&[]), 0.0);
    assert_eq!(weighted_average_cost(&[WeightedCost::new(100.0)]), 100.0);

    let items = [
        WeightedCost::with_weight(100.0, 2.0),
        WeightedCost::with_weight(200.0, 1.0),
    ];
    assert!((weighted_average_cost(&items) - 400.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_approval_rate() {
    assert_eq!(approval_rate(80, 100), 80.0);
    assert_eq!(approval_rate(0, 0), 0.0);
}

#[test]
fn test_budget_utilization() {
    assert!((budget_utilization(1_000_000.0, 10.0) - 110.0).abs() < 1e-9);
    assert!((budget_utilization(1_000_000.0, -5.0) - 95.0).abs() < 1e-9);
    assert_eq!(budget_utilization(0.0, 10.0), 0.0);
}

#[test]
fn test_hospital_metrics_empty() {
    assert_eq!(hospital_metrics(&[]), HospitalMetrics::default());
}

#[test]
fn test_rankings_two_departments() {
    let rankings = department_rankings(&[dept("A", 100.0, 150.0, 10), dept("B", 100.0, 90.0, 10)]);

    assert_eq!(rankings[0].department.name, "A");
    assert_eq!(rankings[0].rank, 1);
    assert_eq!(rankings[0].efficiency, 50.0);
    assert_eq!(rankings[1].department.name, "B");
    assert_eq!(rankings[1].rank, 2);
    assert_eq!(rankings[1].efficiency, -10.0);
}

#[test]
fn test_end_to_end_department() {
    let cardiology = Department {
        name: "Cardiology".into(),
        budget: 5_000_000.0,
        cost_overruns: 12.0,
        patient_load: 2_000,
        revenue_generated: 6_000_000.0,
    };

    assert_eq!(efficiency(cardiology.revenue_generated, cardiology.budget), 20.0);
    assert_eq!(cost_per_patient(cardiology.budget, cardiology.patient_load), 2_500.0);
    assert_eq!(
        revenue_per_patient(cardiology.revenue_generated, cardiology.patient_load),
        3_000.0
    );
    assert!((budget_utilization(cardiology.budget, cardiology.cost_overruns) - 112.0).abs() < 1e-9);

    let rankings = department_rankings(std::slice::from_ref(&cardiology));
    assert_eq!(rankings[0].rank, 1);
    assert_eq!(rankings[0].cost_per_patient, 2_500.0);
}

#[test]
fn test_rankings_ordered_and_stable() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let departments = random_departments(&mut rng, 12);
        let rankings = department_rankings(&departments);

        assert_eq!(rankings.len(), departments.len());
        for (i, ranked) in rankings.iter().enumerate() {
            assert_eq!(ranked.rank, i + 1);
        }

        for pair in rankings.windows(2) {
            assert!(pair[0].efficiency >= pair[1].efficiency);
            if pair[0].efficiency == pair[1].efficiency {
                let first = departments
                    .iter()
                    .position(|d| d.name == pair[0].department.name)
                    .unwrap();
                let second = departments
                    .iter()
                    .position(|d| d.name == pair[1].department.name)
                    .unwrap();
                assert!(first < second, "ties must keep input order");
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let departments = random_departments(&mut rng, 8);
    let items: Vec<WeightedCost> = (0..10)
        .map(|_| WeightedCost::with_weight(rng.gen_range(0.0..10_000.0), rng.gen_range(0.0..5.0)))
        .collect();

    assert_eq!(department_rankings(&departments), department_rankings(&departments));
    assert_eq!(hospital_metrics(&departments), hospital_metrics(&departments));
    assert_eq!(weighted_average_cost(&items), weighted_average_cost(&items));
    assert_eq!(treatment_savings(250_000.0, 90_000.0), treatment_savings(250_000.0, 90_000.0));
    assert_eq!(coverage_impact(80_000.0, 65.0), coverage_impact(80_000.0, 65.0));
    assert_eq!(approval_rate(37, 91), approval_rate(37, 91));

    for d in &departments {
        assert_eq!(
            budget_utilization(d.budget, d.cost_overruns),
            budget_utilization(d.budget, d.cost_overruns)
        );
        assert_eq!(
            profitability(d.revenue_generated, d.budget),
            profitability(d.revenue_generated, d.budget)
        );
    }
}

#[test]
fn test_zero_guards_never_produce_nan() {
    let mut rng = StdRng::seed_from_u64(2024);
    let departments = random_departments(&mut rng, 40);

    let metrics = hospital_metrics(&departments);
    assert!(metrics.avg_cost_per_patient.is_finite());
    assert!(metrics.avg_efficiency.is_finite());

    for ranked in department_rankings(&departments) {
        assert!(ranked.efficiency.is_finite());
        assert!(ranked.profitability.is_finite());
        assert!(ranked.cost_per_patient.is_finite());
        assert!(ranked.revenue_per_patient.is_finite());
    }

    let savings = treatment_savings(0.0, 0.0);
    assert_eq!(savings.percentage_savings, 0.0);
    assert_eq!(savings.cost_ratio, 0.0);
}
