// Per-kind unit behaviors
//
// Every kind currently resolves to the same join stub. The table is the
// seam where real detection/tracking/fusion/encoding logic plugs in, one
// kind at a time, without touching the registry or the invoker.

use crate::pipeline::types::{ParamList, UnitKind};

/// Behavior carried out by one execution unit over one parameter list.
pub type UnitBehavior = fn(UnitKind, &ParamList) -> String;

pub fn behavior_for(kind: UnitKind) -> UnitBehavior {
    match kind {
        UnitKind::BallDetection => join_stub,
        UnitKind::BallTracking => join_stub,
        UnitKind::BallFusion => join_stub,
        UnitKind::PlayerDetection => join_stub,
        UnitKind::PlayerTracking => join_stub,
        UnitKind::PlayerFusion => join_stub,
        UnitKind::Encoder => join_stub,
    }
}

/// Placeholder behavior: join the parameter tokens with the kind's label
/// as separator.
fn join_stub(kind: UnitKind, params: &ParamList) -> String {
    tracing::debug!("{:?} cmd: {:?}", kind, params.tokens());
    params.render_joined(kind.label())
}
