use crate::types::feature::QualityGate;

/// Classifies a free-text status into quality gates. Readiness is exclusive
/// (`ready for qa` wins over `ready`) but `blocked` is tested on its own, so
/// a status such as "Ready - blocked by infra" yields both gates.
pub fn classify_status(status: &str) -> Vec<QualityGate> {
    let status = status.to_lowercase();
    let mut gates = Vec::with_capacity(2);

    if status.contains("ready for qa") {
        gates.push(QualityGate::ReadyForQa);
    } else if status.contains("ready") {
        gates.push(QualityGate::Ready);
    }
    if status.contains("blocked") {
        gates.push(QualityGate::Blocked);
    }

    if gates.is_empty() {
        gates.push(QualityGate::Other);
    }
    gates
}
