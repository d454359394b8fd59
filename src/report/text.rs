use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Cell Nuclei Measurement & Diagnosis Report\n");
    out.push_str("==========================================\n\n");

    out.push_str("1. Reference dataset\n");
    out.push_str(&format!("Source: {}\n", data.dataset.path));
    out.push_str(&format!(
        "Rows: {} (benign {}, malignant {})\n\n",
        data.dataset.n_rows, data.dataset.n_benign, data.dataset.n_malignant
    ));

    out.push_str("2. Measurement input\n");
    for entry in &data.input {
        out.push_str(&format!(
            "{}: {} (scaled {})\n",
            entry.label,
            format_f64_6(entry.raw),
            format_f64_6(entry.scaled)
        ));
    }
    out.push('\n');

    out.push_str("3. Radar projection\n");
    out.push_str(&format!(
        "Radial axis: {}\n",
        if data.radar.clamped {
            "[0, 1] (out-of-range values clipped)"
        } else {
            "unclamped"
        }
    ));
    for (i, category) in data.radar.categories.iter().enumerate() {
        out.push_str(&format!(
            "{}: mean={} se={} worst={}\n",
            category,
            format_f64_6(data.radar.mean[i]),
            format_f64_6(data.radar.se[i]),
            format_f64_6(data.radar.worst[i])
        ));
    }
    out.push('\n');

    out.push_str("4. Cell cluster prediction\n");
    match &data.prediction {
        Some(p) => {
            out.push_str(&format!("The cell cluster is: {}\n", p.diagnosis));
            out.push_str(&format!(
                "Probability of being benign: {}\n",
                format_f64_6(p.p_benign)
            ));
            out.push_str(&format!(
                "Probability of being malignant: {}\n",
                format_f64_6(p.p_malignant)
            ));
        }
        None => {
            let note = data
                .prediction_note
                .as_deref()
                .unwrap_or("prediction path disabled");
            out.push_str(&format!("Prediction unavailable: {note}\n"));
        }
    }
    out.push('\n');

    out.push_str(
        "This tool can assist medical professionals in making a diagnosis, but should not be used as a substitute for a professional diagnosis.\n",
    );

    out
}
