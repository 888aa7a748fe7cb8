use chrono::Utc;
use chrono_tz::Tz;

use crate::data::TimezoneTable;
use crate::number::RegionCode;

use super::errors::{LookupError, LookupOutcome};
use super::report::LocalTime;

/// Resolves the region's primary zone and captures the current wall
/// clock there. Time-dependent by design: two runs legitimately differ
/// in this field and nothing else.
pub(crate) fn resolve_local_time(
    timezones: &TimezoneTable,
    region: &RegionCode,
) -> LookupOutcome<LocalTime> {
    let zone_id = timezones.primary_zone(region).ok_or_else(|| {
        LookupError::Unavailable(format!("no timezone mapping for region {}", region))
    })?;
    let zone: Tz = zone_id
        .parse()
        .map_err(|_| LookupError::Unavailable(format!("invalid timezone data: {}", zone_id)))?;
    let now = Utc::now().with_timezone(&zone);
    Ok(LocalTime {
        zone: zone_id.to_string(),
        utc_offset: now.format("%z").to_string(),
        now,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve_local_time;
    use crate::data::TimezoneTable;
    use crate::enrich::errors::LookupError;
    use crate::number::RegionCode;

    #[test]
    fn resolves_the_primary_zone() {
        let table = TimezoneTable::new();
        let time = resolve_local_time(&table, &RegionCode::new("JP").unwrap()).unwrap();
        assert_eq!(time.zone, "Asia/Tokyo");
        assert_eq!(time.utc_offset, "+0900");
    }

    #[test]
    fn unmapped_region_fails_soft() {
        let table = TimezoneTable::from_entries(&[]);
        let result = resolve_local_time(&table, &RegionCode::new("JP").unwrap());
        assert!(matches!(result, Err(LookupError::Unavailable(_))));
    }

    #[test]
    fn bad_zone_data_fails_soft() {
        let table = TimezoneTable::from_entries(&[("JP", "Asia/Nowhere")]);
        let result = resolve_local_time(&table, &RegionCode::new("JP").unwrap());
        assert!(matches!(result, Err(LookupError::Unavailable(_))));
    }
}
