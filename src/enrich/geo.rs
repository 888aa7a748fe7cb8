use crate::data::{CountryRecord, LocalityTable, WorldTable};
use crate::number::{ParsedNumber, RegionCode};

use super::errors::InternalFault;
use super::report::WorldContext;

/// Static world-context lookup. Deterministic: a resolvable region that
/// the bundled table does not know indicates corrupt data and is fatal to
/// the whole report.
pub(crate) fn world_context(
    world: &WorldTable,
    region: &RegionCode,
) -> Result<(&'static CountryRecord, WorldContext), InternalFault> {
    let record = world
        .get(region)
        .ok_or_else(|| InternalFault::WorldTableMissing(region.clone()))?;
    let context = WorldContext {
        country: record.name.to_string(),
        capital: record.capital.to_string(),
        currency: record.currency.to_string(),
        region_label: record.region_label.to_string(),
        borders: record.borders.iter().map(|b| b.to_string()).collect(),
    };
    Ok((record, context))
}

/// Builds the place-name query handed to the geocoder: the numbering-area
/// locality when the bundled table knows it, otherwise the capital.
pub(crate) fn geocode_query(
    localities: &LocalityTable,
    record: &CountryRecord,
    number: &ParsedNumber,
) -> String {
    let region = number
        .region
        .as_ref()
        .map(RegionCode::as_str)
        .unwrap_or_default();
    match localities.locality_for(region, &number.national_number) {
        Some(locality) => format!("{}, {}", locality, record.name),
        None => format!("{}, {}", record.capital, record.name),
    }
}

#[cfg(test)]
mod tests {
    use super::{geocode_query, world_context};
    use crate::data::{LocalityTable, WorldTable};
    use crate::enrich::errors::InternalFault;
    use crate::number::{parse, RawInput, RegionCode};

    #[test]
    fn world_context_copies_the_record() {
        let world = WorldTable::new();
        let region = RegionCode::new("US").unwrap();
        let (_, context) = world_context(&world, &region).unwrap();
        assert_eq!(context.country, "United States");
        assert_eq!(context.borders, vec!["Canada", "Mexico"]);
    }

    #[test]
    fn missing_entry_is_an_internal_fault() {
        static EMPTY: &[crate::data::CountryRecord] = &[];
        let world = WorldTable::from_records(EMPTY);
        let region = RegionCode::new("US").unwrap();
        let err = world_context(&world, &region).unwrap_err();
        assert_eq!(err, InternalFault::WorldTableMissing(region));
    }

    #[test]
    fn query_prefers_the_area_locality() {
        let world = WorldTable::new();
        let localities = LocalityTable::new();
        let number = parse(&RawInput::new("+14155552671")).unwrap();
        let region = number.region.clone().unwrap();
        let (record, _) = world_context(&world, &region).unwrap();
        assert_eq!(
            geocode_query(&localities, record, &number),
            "San Francisco, California, United States"
        );
    }

    #[test]
    fn query_falls_back_to_the_capital() {
        let world = WorldTable::new();
        let localities = LocalityTable::new();
        let number = parse(&RawInput::new("+19075551234")).unwrap();
        let region = number.region.clone().unwrap();
        let (record, _) = world_context(&world, &region).unwrap();
        assert_eq!(
            geocode_query(&localities, record, &number),
            "Washington, D.C., United States"
        );
    }
}
