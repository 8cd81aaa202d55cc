pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean of the present finite values, `None` when there are none.
    pub fn mean<I>(values: I) -> Option<f64>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let (sum, count) = values
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(StatsHelper::mean(Vec::new()), None);
        assert_eq!(StatsHelper::mean(vec![None, Some(f64::NAN)]), None);
    }

    #[test]
    fn mean_skips_absent_values() {
        assert_eq!(StatsHelper::mean(vec![Some(1.0), None, Some(3.0)]), Some(2.0));
        assert_eq!(
            StatsHelper::mean(vec![Some(f64::INFINITY), Some(4.0)]),
            Some(4.0)
        );
    }
}
