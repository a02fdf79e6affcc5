//! Province market figures, including the running production total invariant.

use proptest::prelude::*;
use testresult::TestResult;

use playbill::prelude::*;

fn asia() -> Province {
    Province::new(ProvinceData::sample())
}

#[test]
fn fixture_provinces_match_sample_figures() -> TestResult {
    let fixture = Fixture::from_set("sample")?;

    let asia = fixture.province("asia")?;

    assert_eq!(asia.shortfall(), 5);
    assert_eq!(asia.profit(), 230);

    let empty = fixture.province("no-producers")?;

    assert_eq!(empty.total_production(), 0);
    assert_eq!(empty.shortfall(), 30);
    assert_eq!(empty.profit(), 0);

    Ok(())
}

#[test]
fn producer_without_production_counts_as_zero() -> TestResult {
    let fixture = Fixture::from_set("repertory")?;
    let anatolia = fixture.province("anatolia")?;

    assert_eq!(anatolia.total_production(), 16);
    assert_eq!(anatolia.shortfall(), -2);
    assert_eq!(anatolia.demand_cost(), 112);
    assert_eq!(anatolia.profit(), 140);

    Ok(())
}

#[test]
fn each_fixture_province_is_independent() -> TestResult {
    let fixture = Fixture::from_set("sample")?;

    let mut first = fixture.province("asia")?;
    let second = fixture.province("asia")?;

    first.set_demand(0);

    assert_eq!(first.profit(), 0);
    assert_eq!(second.profit(), 230);

    Ok(())
}

#[test]
fn total_production_recovers_from_extreme_values() -> TestResult {
    let mut asia = asia();
    let keys = asia.producer_keys().to_vec();

    for key in &keys {
        asia.producer_mut(*key)
            .ok_or("missing producer")?
            .set_production(i64::MAX);
    }

    assert!(asia.total_production().is_nan());

    for key in &keys {
        asia.producer_mut(*key)
            .ok_or("missing producer")?
            .set_production(1);
    }

    assert_eq!(asia.total_production(), 3);
    assert_eq!(asia.recomputed_total_production(), 3);

    Ok(())
}

#[test]
fn non_numeric_demand_propagates() {
    let mut asia = asia();

    asia.set_demand("plenty");

    assert!(asia.shortfall().is_nan());
    assert!(asia.satisfied_demand().is_nan());
    assert!(asia.demand_value().is_nan());
    assert!(asia.demand_cost().is_nan());
    assert!(asia.profit().is_nan());
}

#[derive(Debug, Clone)]
enum Change {
    Production(usize, i64),
    ProductionText(usize, String),
    Cost(usize, i64),
    Demand(i64),
    Price(i64),
    Add(i64, i64),
}

fn change() -> impl Strategy<Value = Change> {
    prop_oneof![
        (0..4usize, -50..200i64).prop_map(|(idx, value)| Change::Production(idx, value)),
        (0..4usize, any::<i64>()).prop_map(|(idx, value)| Change::Production(idx, value)),
        (0..4usize, "[ a-z0-9-]{0,4}").prop_map(|(idx, text)| Change::ProductionText(idx, text)),
        (0..4usize, 0..30i64).prop_map(|(idx, value)| Change::Cost(idx, value)),
        (-20..200i64).prop_map(Change::Demand),
        (0..50i64).prop_map(Change::Price),
        (0..30i64, 0..100i64).prop_map(|(cost, production)| Change::Add(cost, production)),
        (0..30i64, any::<i64>()).prop_map(|(cost, production)| Change::Add(cost, production)),
    ]
}

fn producer_at(province: &mut Province, idx: usize) -> Option<ProducerMut<'_>> {
    let keys = province.producer_keys();
    let key = keys.get(idx % keys.len().max(1)).copied()?;

    province.producer_mut(key)
}

fn apply(province: &mut Province, change: Change) {
    match change {
        Change::Production(idx, value) => {
            if let Some(mut producer) = producer_at(province, idx) {
                producer.set_production(value);
            }
        }
        Change::ProductionText(idx, text) => {
            if let Some(mut producer) = producer_at(province, idx) {
                producer.set_production(text);
            }
        }
        Change::Cost(idx, value) => {
            if let Some(mut producer) = producer_at(province, idx) {
                producer.set_cost(value);
            }
        }
        Change::Demand(value) => {
            province.set_demand(value);
        }
        Change::Price(value) => {
            province.set_price(value);
        }
        Change::Add(cost, production) => {
            province.add_producer(ProducerData::new("Extra", cost, production));
        }
    }
}

proptest! {
    #[test]
    fn total_production_never_drifts(changes in prop::collection::vec(change(), 0..40)) {
        let mut province = asia();

        for change in changes {
            apply(&mut province, change);

            prop_assert_eq!(province.total_production(), province.recomputed_total_production());
        }
    }

    #[test]
    fn derived_figures_are_stable_between_reads(changes in prop::collection::vec(change(), 0..20)) {
        let mut province = asia();

        for change in changes {
            apply(&mut province, change);
        }

        prop_assert_eq!(province.shortfall(), province.shortfall());
        prop_assert_eq!(province.satisfied_demand(), province.satisfied_demand());
        prop_assert_eq!(province.demand_value(), province.demand_value());
        prop_assert_eq!(province.demand_cost(), province.demand_cost());
        prop_assert_eq!(province.profit(), province.profit());
    }

    #[test]
    fn shortfall_is_demand_less_production(demand in -100..300i64) {
        let mut province = asia();

        province.set_demand(demand);

        prop_assert_eq!(province.shortfall(), demand - 25);
    }
}
