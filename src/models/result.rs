/// Encouragement tier chosen by the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    Excellent,
    Good,
    KeepPracticing,
}

impl Remark {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 50.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work! You're a Python Pro!",
            Self::Good => "Good job! Keep improving!",
            Self::KeepPracticing => "Keep practicing, you'll get there!",
        }
    }
}

/// Final outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub remark: Remark,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            remark: Remark::for_percentage(percentage),
        }
    }
}

/// `score / total * 100`, rounded to two decimal places (ties to even).
pub fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = score as f64 / total as f64 * 100.0;
    (raw * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(3, 6), 50.0);
        assert_eq!(percentage(6, 6), 100.0);
        assert_eq!(percentage(1, 6), 16.67);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(0, 6), 0.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_percentage_halves_round_to_even() {
        assert_eq!(percentage(1, 32), 3.12);
        assert_eq!(percentage(3, 32), 9.38);
    }

    #[test]
    fn test_remark_thresholds() {
        assert_eq!(Remark::for_percentage(100.0), Remark::Excellent);
        assert_eq!(Remark::for_percentage(80.0), Remark::Excellent);
        assert_eq!(Remark::for_percentage(79.99), Remark::Good);
        assert_eq!(Remark::for_percentage(50.0), Remark::Good);
        assert_eq!(Remark::for_percentage(49.99), Remark::KeepPracticing);
        assert_eq!(Remark::for_percentage(0.0), Remark::KeepPracticing);
    }

    #[test]
    fn test_result_for_five_of_six() {
        let result = QuizResult::new(5, 6);
        assert_eq!(result.percentage, 83.33);
        assert_eq!(result.remark, Remark::Excellent);
    }
}
