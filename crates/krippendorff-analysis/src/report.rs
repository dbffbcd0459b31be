//! Tab-delimited rendering of the coincidence matrix.
//!
//! Illustrative output only; the layout carries no compatibility guarantee.

use std::fmt::Write;

use num_rational::BigRational;

use krippendorff_core::config::ReportConfig;

use crate::coincidence::CoincidenceMatrix;

/// Render the matrix with row marginals, a footer of all marginals, and
/// the grand total:
///
/// ```text
/// \t|\t1\t2\t|
/// ――――――――
/// 1\t|\tO11\tO12\t|\tN1
/// 2\t|\tO21\tO22\t|\tN2
/// ――――――――
/// \t|\tN1\tN2\t|\tn
/// ```
pub fn render_report(
    matrix: &CoincidenceMatrix,
    marginals: &[BigRational],
    total: &BigRational,
    config: &ReportConfig,
) -> String {
    let separator = config.separator_line();
    let mut rows = Vec::with_capacity(matrix.dimension() + 4);

    rows.push(tab_join(
        ["".to_string(), "|".to_string()]
            .into_iter()
            .chain(matrix.values().iter().map(ToString::to_string))
            .chain(["|".to_string()]),
    ));
    rows.push(separator.clone());

    for ((value, row), marginal) in matrix.rows().zip(marginals) {
        rows.push(tab_join(
            [value.to_string(), "|".to_string()]
                .into_iter()
                .chain(row.iter().map(ToString::to_string))
                .chain(["|".to_string(), marginal.to_string()]),
        ));
    }

    rows.push(separator);
    rows.push(tab_join(
        ["".to_string(), "|".to_string()]
            .into_iter()
            .chain(marginals.iter().map(ToString::to_string))
            .chain(["|".to_string(), total.to_string()]),
    ));

    rows.join("\n")
}

/// Raw matrix rows, every cell followed by a tab.
pub fn render_matrix(matrix: &CoincidenceMatrix) -> String {
    let mut out = String::new();
    for (_, row) in matrix.rows() {
        for cell in row {
            let _ = write!(out, "{cell}\t");
        }
        out.push('\n');
    }
    out
}

fn tab_join(fields: impl Iterator<Item = String>) -> String {
    fields.collect::<Vec<_>>().join("\t")
}
