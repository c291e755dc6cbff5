use serde_json::Value;

/// Mean of the numeric `grade` fields across a batch of per-question
/// entries. Entries that are not objects or carry no numeric grade are
/// skipped; an empty or fully-malformed batch averages to 0.
pub fn average_grade(entries: &[Value]) -> f64 {
    let mut total = 0.0;
    let mut count = 0u32;

    for entry in entries {
        let grade = entry
            .as_object()
            .and_then(|map| map.get("grade"))
            .and_then(Value::as_f64);
        if let Some(grade) = grade {
            total += grade;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        total / f64::from(count)
    }
}
