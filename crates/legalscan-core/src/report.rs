use crate::model::{Category, LegalDomain, LegalElement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complexity buckets, applied to the raw score regardless of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityBucket {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityBucket {
    pub const ALL: [ComplexityBucket; 4] = [
        ComplexityBucket::Simple,
        ComplexityBucket::Moderate,
        ComplexityBucket::Complex,
        ComplexityBucket::VeryComplex,
    ];

    pub fn from_score(score: u32) -> ComplexityBucket {
        match score {
            0..=3 => ComplexityBucket::Simple,
            4..=8 => ComplexityBucket::Moderate,
            9..=15 => ComplexityBucket::Complex,
            _ => ComplexityBucket::VeryComplex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityBucket::Simple => "simple",
            ComplexityBucket::Moderate => "moderate",
            ComplexityBucket::Complex => "complex",
            ComplexityBucket::VeryComplex => "very_complex",
        }
    }
}

/// Summary statistics over one or more element sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_elements: usize,
    /// Always holds all four categories, zero when absent.
    pub symbol_distribution: BTreeMap<Category, usize>,
    /// Only domains that occur.
    pub domain_distribution: BTreeMap<LegalDomain, usize>,
    /// Always holds all four buckets, zero when absent.
    pub complexity_distribution: BTreeMap<ComplexityBucket, usize>,
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self {
            total_elements: 0,
            symbol_distribution: Category::ALL.iter().map(|c| (*c, 0)).collect(),
            domain_distribution: BTreeMap::new(),
            complexity_distribution: ComplexityBucket::ALL.iter().map(|b| (*b, 0)).collect(),
        }
    }
}

impl AnalysisReport {
    /// Count one more element.
    fn add(mut self, element: &LegalElement) -> Self {
        self.total_elements += 1;
        *self
            .symbol_distribution
            .entry(element.category_symbol)
            .or_insert(0) += 1;
        *self
            .domain_distribution
            .entry(element.legal_domain)
            .or_insert(0) += 1;
        *self
            .complexity_distribution
            .entry(ComplexityBucket::from_score(element.complexity_score))
            .or_insert(0) += 1;
        self
    }

    /// Combine two reports. Commutative and associative.
    pub fn merge(mut self, other: &AnalysisReport) -> Self {
        self.total_elements += other.total_elements;
        for (k, v) in &other.symbol_distribution {
            *self.symbol_distribution.entry(*k).or_insert(0) += v;
        }
        for (k, v) in &other.domain_distribution {
            *self.domain_distribution.entry(*k).or_insert(0) += v;
        }
        for (k, v) in &other.complexity_distribution {
            *self.complexity_distribution.entry(*k).or_insert(0) += v;
        }
        self
    }

    pub fn count(&self, category: Category) -> usize {
        self.symbol_distribution.get(&category).copied().unwrap_or(0)
    }

    pub fn bucket_count(&self, bucket: ComplexityBucket) -> usize {
        self.complexity_distribution.get(&bucket).copied().unwrap_or(0)
    }
}

/// Fold elements into a report. Accepts any mix of sources.
pub fn aggregate<'a, I>(elements: I) -> AnalysisReport
where
    I: IntoIterator<Item = &'a LegalElement>,
{
    elements
        .into_iter()
        .fold(AnalysisReport::default(), AnalysisReport::add)
}

/// Fold several per-source reports into one.
pub fn merge_all<'a, I>(reports: I) -> AnalysisReport
where
    I: IntoIterator<Item = &'a AnalysisReport>,
{
    reports
        .into_iter()
        .fold(AnalysisReport::default(), AnalysisReport::merge)
}
