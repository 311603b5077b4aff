use crate::pipeline::units;
use serde::Serialize;
use std::fmt;

/// The seven pipeline stages an execution unit can stand in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitKind {
    BallDetection,
    BallTracking,
    BallFusion,
    PlayerDetection,
    PlayerTracking,
    PlayerFusion,
    Encoder,
}

impl UnitKind {
    /// Short selection code expected after the `-t` flag.
    pub fn code(&self) -> &'static str {
        match self {
            UnitKind::BallDetection => "b",
            UnitKind::BallTracking => "tb",
            UnitKind::BallFusion => "fb",
            UnitKind::PlayerDetection => "p",
            UnitKind::PlayerTracking => "tp",
            UnitKind::PlayerFusion => "fp",
            UnitKind::Encoder => "e",
        }
    }

    /// Join label for this kind's stub output. The spacing is part of the
    /// output format and must not be normalized.
    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::BallDetection => "BallDetection      cmd: ",
            UnitKind::BallTracking => "BallTracking      cmd: ",
            UnitKind::BallFusion => "BallFusion      cmd: ",
            UnitKind::PlayerDetection => "PlayerDetection cmd: ",
            UnitKind::PlayerTracking => "PlayerTracking  cmd: ",
            UnitKind::PlayerFusion => "PlayerFusion    cmd: ",
            UnitKind::Encoder => "Encoder         cmd: ",
        }
    }

    pub fn all() -> [UnitKind; 7] {
        [
            UnitKind::BallDetection,
            UnitKind::BallTracking,
            UnitKind::BallFusion,
            UnitKind::PlayerDetection,
            UnitKind::PlayerTracking,
            UnitKind::PlayerFusion,
            UnitKind::Encoder,
        ]
    }
}

/// Opaque reference to a frame image. The real pipeline will replace this
/// with an actual frame handle; the scaffold only carries it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(inner: impl Into<String>) -> Self {
        Self(inner.into())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tagged parameter in a per-frame call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Param {
    Frame(i64),
    Info(String),
    Image(ImageRef),
}

impl Param {
    /// Flag token that precedes the value on the assembled parameter list.
    pub fn tag(&self) -> &'static str {
        match self {
            Param::Frame(_) => "-f",
            Param::Info(_) => "-s",
            Param::Image(_) => "-img",
        }
    }

    pub fn value(&self) -> String {
        match self {
            Param::Frame(n) => n.to_string(),
            Param::Info(s) => s.clone(),
            Param::Image(r) => r.to_string(),
        }
    }
}

/// Ordered parameter list built fresh for each frame call.
///
/// Flattens to flag/value token pairs, e.g.
/// `["-f", "1", "-s", "test info", "-img", "test image"]`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParamList(Vec<Param>);

impl ParamList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, param: Param) {
        self.0.push(param);
    }

    /// Flattened token sequence: tag, value, tag, value, ...
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.0.len() * 2);
        for param in &self.0 {
            tokens.push(param.tag().to_string());
            tokens.push(param.value());
        }
        tokens
    }

    /// Number of flattened tokens.
    pub fn len(&self) -> usize {
        self.0.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the flattened tokens with `separator` between them. Degenerates
    /// to the empty string for an empty list and to the lone token for a
    /// single-token list.
    pub fn render_joined(&self, separator: &str) -> String {
        self.tokens().join(separator)
    }
}

/// An execution unit: its kind plus the raw token list it was constructed
/// from. The token list is opaque construction context; nothing reads it
/// yet beyond diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecUnit {
    kind: UnitKind,
    context: Vec<String>,
}

impl ExecUnit {
    pub fn new(kind: UnitKind, context: Vec<String>) -> Self {
        Self { kind, context }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Run this unit over an assembled parameter list.
    pub fn execute(&self, params: &ParamList) -> String {
        let behavior = units::behavior_for(self.kind);
        behavior(self.kind, params)
    }
}

/// The per-frame call surface: every field optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameRequest {
    pub frame_no: Option<i64>,
    pub info: Option<String>,
    pub image: Option<ImageRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let codes: Vec<&str> = UnitKind::all().iter().map(|k| k.code()).collect();
        let mut deduped = codes.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(codes.len(), deduped.len());
    }

    #[test]
    fn test_labels_verbatim() {
        assert_eq!(UnitKind::BallDetection.label(), "BallDetection      cmd: ");
        assert_eq!(UnitKind::BallTracking.label(), "BallTracking      cmd: ");
        assert_eq!(UnitKind::BallFusion.label(), "BallFusion      cmd: ");
        assert_eq!(UnitKind::PlayerDetection.label(), "PlayerDetection cmd: ");
        assert_eq!(UnitKind::PlayerTracking.label(), "PlayerTracking  cmd: ");
        assert_eq!(UnitKind::PlayerFusion.label(), "PlayerFusion    cmd: ");
        assert_eq!(UnitKind::Encoder.label(), "Encoder         cmd: ");
    }

    #[test]
    fn test_param_list_tokens() {
        let mut params = ParamList::new();
        params.push(Param::Frame(1));
        params.push(Param::Info("test info".to_string()));
        params.push(Param::Image(ImageRef::new("test image")));

        assert_eq!(
            params.tokens(),
            vec!["-f", "1", "-s", "test info", "-img", "test image"]
        );
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn test_render_joined_degenerate_cases() {
        let empty = ParamList::new();
        assert!(empty.is_empty());
        assert_eq!(empty.render_joined(" | "), "");

        // A single parameter still yields two tokens with one separator
        let mut single = ParamList::new();
        single.push(Param::Frame(7));
        assert_eq!(single.render_joined(" | "), "-f | 7");
    }

    #[test]
    fn test_exec_unit_keeps_context() {
        let context = vec!["-t".to_string(), "b".to_string(), "-v".to_string()];
        let unit = ExecUnit::new(UnitKind::BallDetection, context.clone());
        assert_eq!(unit.kind(), UnitKind::BallDetection);
        assert_eq!(unit.context(), context.as_slice());
    }
}
