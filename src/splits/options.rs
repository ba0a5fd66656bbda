use crate::error::ScanError;
use crate::splits::index::MinCount;

#[derive(Clone, Debug, PartialEq)]
pub struct MaskingOptions {
    pub min_total: u64,
    pub min_count: MinCount,
    pub mask_chi: f64,
    pub nthreads: usize,
    /// Stop after this many rounds; 0 runs until nothing is left to mask.
    pub max_rounds: usize,
}

impl Default for MaskingOptions {
    fn default() -> Self {
        Self {
            min_total: 500,
            min_count: MinCount::Fixed(50),
            mask_chi: 5000.0,
            nthreads: 100,
            max_rounds: 0,
        }
    }
}

impl MaskingOptions {
    pub fn new(min_total: u64, min_count: u64, mask_chi: f64, nthreads: usize) -> Self {
        Self {
            min_total,
            min_count: MinCount::Fixed(min_count),
            mask_chi,
            nthreads,
            max_rounds: 0,
        }
    }

    pub fn with_derived_min_count(mut self, derive: bool) -> Self {
        if derive {
            self.min_count = MinCount::Derived;
        }
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if self.nthreads == 0 {
            return Err(ScanError::InvalidOption {
                name: "nthreads",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.mask_chi.is_finite() || self.mask_chi < 0.0 {
            return Err(ScanError::InvalidOption {
                name: "mask_chi",
                reason: format!("must be a finite, non-negative number (got {})", self.mask_chi),
            });
        }
        Ok(())
    }
}
