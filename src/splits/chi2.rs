/// Pearson's chi-square statistic for a 2×2 contingency table with Yates'
/// continuity correction.
///
/// Each `|observed - expected|` is reduced by `min(0.5, |observed - expected|)`
/// before squaring. Tables with an empty row or column (any expected count of
/// zero) have no defined statistic and yield 0.
pub fn chi2_yates(table: [[f64; 2]; 2]) -> f64 {
    let rows = [table[0][0] + table[0][1], table[1][0] + table[1][1]];
    let cols = [table[0][0] + table[1][0], table[0][1] + table[1][1]];
    let total = rows[0] + rows[1];
    if total <= 0.0 {
        return 0.0;
    }

    let mut chi2 = 0.0;
    for (i, row) in table.iter().enumerate() {
        for (j, &observed) in row.iter().enumerate() {
            let expected = rows[i] * cols[j] / total;
            if expected <= 0.0 {
                return 0.0;
            }
            let diff = (observed - expected).abs();
            let corrected = diff - diff.min(0.5);
            chi2 += corrected * corrected / expected;
        }
    }

    if chi2.is_finite() {
        chi2
    } else {
        0.0
    }
}
