use std::fs;
use std::path::Path;

use log::debug;

use crate::enrich::report::{GeoEstimate, Report};

use super::ArtifactError;

const ESRI_IMAGERY_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

/// Renders the interactive map page for a report that carries a
/// coordinate. Callers skip this artifact entirely when the estimate is
/// absent; that is a recorded skip, not a failure.
pub fn write_map_page(report: &Report, geo: &GeoEstimate, path: &Path) -> Result<(), ArtifactError> {
    let html = map_html(report, geo);
    fs::write(path, html).map_err(|err| ArtifactError::Write {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    debug!("map page written to {}", path.display());
    Ok(())
}

fn map_html(report: &Report, geo: &GeoEstimate) -> String {
    let popup = format!(
        "<b>{}</b><br><i>Estimated location for {}</i>",
        geo.query, report.number.international
    );
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Estimated location for {e164}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], 11);
var streets = L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
var satellite = L.tileLayer('{esri_url}', {{
    attribution: 'Esri'
}});
L.control.layers({{'OpenStreetMap': streets, 'Satellite View': satellite}}).addTo(map);
L.marker([{lat}, {lon}]).addTo(map).bindPopup("{popup}");
</script>
</body>
</html>
"#,
        e164 = report.number.e164,
        lat = geo.latitude,
        lon = geo.longitude,
        esri_url = ESRI_IMAGERY_URL,
        popup = popup.replace('"', "\\\""),
    )
}

#[cfg(test)]
mod tests {
    use super::{map_html, write_map_page};
    use crate::enrich::errors::LookupError;
    use crate::enrich::report::{GeoEstimate, Report};
    use crate::number::{parse, RawInput};
    use crate::providers::Coordinate;

    fn unavailable<T>() -> Result<T, LookupError> {
        Err(LookupError::Unavailable("test".into()))
    }

    fn sample() -> (Report, GeoEstimate) {
        let number = parse(&RawInput::new("+14155552671")).unwrap();
        let geo = GeoEstimate::new(
            Coordinate {
                latitude: 37.7792,
                longitude: -122.4193,
            },
            "San Francisco, California, United States",
        );
        let report = Report::assemble(
            number,
            unavailable(),
            unavailable(),
            Ok(geo.clone()),
            unavailable(),
        );
        (report, geo)
    }

    #[test]
    fn page_has_both_selectable_layers_and_the_marker() {
        let (report, geo) = sample();
        let html = map_html(&report, &geo);
        assert!(html.contains("tile.openstreetmap.org"));
        assert!(html.contains("World_Imagery"));
        assert!(html.contains("L.control.layers"));
        assert!(html.contains("[37.7792, -122.4193]"));
        assert!(html.contains("Estimated location for +1 415-555-2671"));
    }

    #[test]
    fn writes_the_page_to_disk() {
        let (report, geo) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        write_map_page(&report, &geo, &path).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("leaflet"));
    }
}
