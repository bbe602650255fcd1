//! Cross-checks over the static catalogs: shapes, counts and the
//! relationships the engine relies on.

use std::collections::HashSet;

use startrade_game::catalog;

#[test]
fn trade_item_catalog_is_complete() {
    assert_eq!(catalog::trade_item_count(), 10);
    let names: HashSet<&str> = (0..catalog::trade_item_count())
        .map(|i| catalog::trade_item(i).name)
        .collect();
    assert_eq!(names.len(), catalog::trade_item_count());
}

#[test]
fn surge_conditions_cover_every_eventful_status() {
    // Every non-uneventful condition surges at least one good, so system
    // statuses always matter to the market.
    for status in catalog::SystemStatus::EVENTFUL {
        let surged = (0..catalog::trade_item_count())
            .any(|i| catalog::trade_item(i).double_price_status == Some(status));
        assert!(surged, "{}", status.key());
    }
}

#[test]
fn politics_wanted_items_reference_real_goods() {
    for index in 0..catalog::politics_count() {
        let politics = catalog::politics(index);
        if let Some(item_index) = politics.wanted_trade_item {
            let item = catalog::trade_item(item_index);
            assert!(!item.name.is_empty(), "{}", politics.name);
        }
    }
}

#[test]
fn every_politics_band_admits_some_ship_market() {
    // The cheapest hull must be purchasable somewhere inside every
    // jurisdiction's tech band, or some campaigns could never re-ship.
    let min_ship_tech = (0..catalog::ship_type_count())
        .map(|i| catalog::ship_type(i).min_tech_level)
        .min()
        .unwrap();
    let max_band = (0..catalog::politics_count())
        .map(|i| catalog::politics(i).max_tech_level)
        .max()
        .unwrap();
    assert!(min_ship_tech <= max_band);
}

#[test]
fn equipment_prices_rise_with_tech() {
    for i in 1..catalog::weapon_count() {
        assert!(catalog::weapon(i).price > catalog::weapon(i - 1).price);
        assert!(catalog::weapon(i).power > catalog::weapon(i - 1).power);
    }
    for i in 1..catalog::shield_count() {
        assert!(catalog::shield(i).price > catalog::shield(i - 1).price);
    }
}

#[test]
fn mercenary_names_are_unique_and_sized() {
    assert_eq!(catalog::mercenary_name_count(), 31);
    let unique: HashSet<&str> = (0..catalog::mercenary_name_count())
        .map(catalog::mercenary_name)
        .collect();
    assert_eq!(unique.len(), 31);
}

#[test]
fn system_names_cover_the_galaxy() {
    assert_eq!(catalog::system_name_count(), catalog::MAX_SOLAR_SYSTEM);
    let unique: HashSet<&str> = (0..catalog::system_name_count())
        .map(catalog::system_name)
        .collect();
    assert_eq!(unique.len(), catalog::MAX_SOLAR_SYSTEM);
}
