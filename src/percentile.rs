use crate::error::Error;

/// Turn a rank out of `total` into a percentile.
///
/// With `inverse` set the result reads as "in the top X%" (rank 1 of 100 is 1),
/// otherwise as "ranks better than X%" (rank 1 of 100 is 99). The result is
/// always rounded up.
pub fn percentile(rank: u64, total: u64, inverse: bool) -> Result<u64, Error> {
    if total == 0 {
        return Err(Error::NoTeams);
    }

    let raw = (100.0 / total as f64) * rank as f64;
    let result = if inverse { raw } else { 100.0 - raw };

    Ok(result.ceil().max(0.0) as u64)
}
