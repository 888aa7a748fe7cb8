use std::path::Path;

use image::Luma;
use log::debug;
use qrcode::QrCode;

use crate::enrich::report::Report;
use crate::number::ParsedNumber;

use super::ArtifactError;

/// vCard 3.0 payload carrying the number as both the display name and the
/// telephone entry, so scanning lands straight in the contacts app.
pub(crate) fn vcard_payload(number: &ParsedNumber) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nFN:{e164}\nTEL;TYPE=CELL:{e164}\nEND:VCARD",
        e164 = number.e164
    )
}

/// Renders the vCard QR image. Independent of report completeness: only
/// the parsed number is needed.
pub fn write_contact_code(report: &Report, path: &Path) -> Result<(), ArtifactError> {
    let payload = vcard_payload(&report.number);
    let code =
        QrCode::new(payload.as_bytes()).map_err(|err| ArtifactError::Encode(err.to_string()))?;
    let image = code.render::<Luma<u8>>().min_dimensions(360, 360).build();
    image.save(path).map_err(|err| ArtifactError::Write {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    debug!("contact code written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{vcard_payload, write_contact_code};
    use crate::enrich::errors::LookupError;
    use crate::enrich::report::Report;
    use crate::number::{parse, RawInput};

    fn unavailable<T>() -> Result<T, LookupError> {
        Err(LookupError::Unavailable("test".into()))
    }

    fn sample_report() -> Report {
        let number = parse(&RawInput::new("+14155552671")).unwrap();
        Report::assemble(number, unavailable(), unavailable(), unavailable(), unavailable())
    }

    #[test]
    fn payload_is_a_wellformed_vcard() {
        let report = sample_report();
        let payload = vcard_payload(&report.number);
        assert!(payload.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
        assert!(payload.contains("TEL;TYPE=CELL:+14155552671"));
        assert!(payload.ends_with("END:VCARD"));
    }

    #[test]
    fn writes_a_png_even_for_a_bare_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contact.png");
        write_contact_code(&sample_report(), &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let report = sample_report();
        let result = write_contact_code(&report, std::path::Path::new("/nonexistent/contact.png"));
        assert!(matches!(result, Err(super::ArtifactError::Write { .. })));
    }
}
