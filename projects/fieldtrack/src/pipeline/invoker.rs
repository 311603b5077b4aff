// Frame invoker: assembles the per-frame parameter list and runs one unit

use crate::pipeline::types::{ExecUnit, FrameRequest, Param, ParamList};

/// Build the flat parameter list for one frame and delegate it to the unit.
///
/// Each field of the request is appended as a flag/value pair only when
/// present; a negative frame number is dropped, and a missing image is a
/// diagnostic-only condition.
pub fn execute_frame(unit: &ExecUnit, request: &FrameRequest) -> String {
    let mut params = ParamList::new();

    if let Some(frame_no) = request.frame_no {
        if frame_no >= 0 {
            params.push(Param::Frame(frame_no));
        } else {
            tracing::debug!("Dropping negative frame number: {}", frame_no);
        }
    }

    if let Some(info) = &request.info {
        params.push(Param::Info(info.clone()));
    }

    match &request.image {
        Some(image) => params.push(Param::Image(image.clone())),
        None => tracing::debug!("image is none"),
    }

    if params.is_empty() {
        tracing::debug!("Invoking {:?} with an empty parameter list", unit.kind());
    } else {
        tracing::debug!(
            "Invoking {:?} with {} parameter tokens",
            unit.kind(),
            params.len()
        );
    }
    unit.execute(&params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::registry::make_unit;
    use crate::pipeline::types::{ImageRef, UnitKind};

    fn request(frame_no: Option<i64>, info: Option<&str>, image: Option<&str>) -> FrameRequest {
        FrameRequest {
            frame_no,
            info: info.map(str::to_string),
            image: image.map(ImageRef::new),
        }
    }

    #[test]
    fn test_full_request_golden_output() {
        let unit = make_unit("-t b").unwrap().unwrap();
        let output = execute_frame(&unit, &request(Some(1), Some("test info"), Some("test image")));

        let expected = ["-f", "1", "-s", "test info", "-img", "test image"]
            .join(UnitKind::BallDetection.label());
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_request_yields_empty_output() {
        let unit = make_unit("-t e").unwrap().unwrap();
        assert_eq!(execute_frame(&unit, &request(None, None, None)), "");
    }

    #[test]
    fn test_negative_frame_is_dropped() {
        let unit = make_unit("-t tp").unwrap().unwrap();
        let output = execute_frame(&unit, &request(Some(-4), Some("late goal"), None));

        let expected = ["-s", "late goal"].join(UnitKind::PlayerTracking.label());
        assert_eq!(output, expected);
    }

    #[test]
    fn test_missing_image_only_skips_image_pair() {
        let unit = make_unit("-t fp").unwrap().unwrap();
        let output = execute_frame(&unit, &request(Some(12), None, None));

        let expected = ["-f", "12"].join(UnitKind::PlayerFusion.label());
        assert_eq!(output, expected);
    }

    #[test]
    fn test_repeat_invocation_is_identical() {
        let unit = make_unit("-t fb").unwrap().unwrap();
        let req = request(Some(2), Some("corner kick"), Some("frame_0002.png"));

        let first = execute_frame(&unit, &req);
        let second = execute_frame(&unit, &req);
        assert_eq!(first, second);
    }
}
