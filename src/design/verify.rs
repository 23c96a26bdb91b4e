//! Verification of Kirkman schedules.
//!
//! A schedule of order v is a Kirkman triple system when
//! 1. every day partitions the points `1..=v`,
//! 2. no triple appears twice,
//! 3. it holds v(v-1)/6 triples in total, and
//! 4. every pair of distinct points lies in exactly one triple.
//!
//! Condition 4 is the Steiner property and is checked directly: distinct
//! triples alone do not rule out a pair being covered twice.

use std::collections::HashMap;

use super::{Point, Solution};
use crate::error::{Error, Result};

/// Outcome of verifying a schedule.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    /// Whether every check passed.
    pub is_valid: bool,
    /// Number of days checked.
    pub days: usize,
    /// Number of distinct triples seen.
    pub distinct_triples: usize,
    /// Every violation found, in check order. Each entry is one of the
    /// verification variants of [`Error`].
    pub issues: Vec<Error>,
}

impl VerificationResult {
    /// Turn a failed result into its first issue.
    ///
    /// # Errors
    ///
    /// Returns the first recorded issue if the schedule is invalid.
    pub fn into_result(mut self) -> Result<Self> {
        if self.issues.is_empty() {
            Ok(self)
        } else {
            Err(self.issues.swap_remove(0))
        }
    }
}

/// Check a schedule against all Kirkman triple system invariants.
///
/// Collects every issue rather than stopping at the first one.
///
/// # Example
///
/// ```
/// use kirkman::design::{verify_solution, Solution, Triple};
///
/// // The unique KTS(3): one day, one triple
/// let solution = Solution::from_days(3, vec![vec![Triple::new(1, 2, 3)]]);
/// assert!(verify_solution(&solution).is_valid);
///
/// let broken = Solution::from_days(3, vec![vec![Triple::new(1, 2, 2)]]);
/// assert!(!verify_solution(&broken).is_valid);
/// ```
#[must_use]
pub fn verify_solution(solution: &Solution) -> VerificationResult {
    let order = solution.order();
    let mut issues = Vec::new();

    check_partitions(solution, &mut issues);
    let distinct_triples = check_triples(solution, &mut issues);

    let expected = expected_triples(order);
    if distinct_triples != expected {
        issues.push(Error::TripleCount {
            distinct: distinct_triples,
            expected,
        });
    }

    check_pairs(solution, &mut issues);

    tracing::debug!(
        order,
        days = solution.len(),
        distinct_triples,
        issues = issues.len(),
        "verified schedule"
    );

    VerificationResult {
        is_valid: issues.is_empty(),
        days: solution.len(),
        distinct_triples,
        issues,
    }
}

/// Number of triples in a Steiner triple system on `order` points.
fn expected_triples(order: u32) -> usize {
    let v = order as usize;
    v * v.saturating_sub(1) / 6
}

/// Every day must hit each point of `1..=v` exactly once.
fn check_partitions(solution: &Solution, issues: &mut Vec<Error>) {
    let order = solution.order() as usize;

    for day in solution.days() {
        let mut seen = vec![false; order + 1];
        let mut covered = 0;
        let mut total = 0;

        for point in day.triples.iter().flat_map(|t| t.points()) {
            total += 1;
            let idx = point as usize;
            if (1..=order).contains(&idx) && !seen[idx] {
                seen[idx] = true;
                covered += 1;
            }
        }

        if covered != order || total != order {
            issues.push(Error::MissingPoints {
                day: day.number,
                covered,
                expected: order,
            });
        }
    }
}

/// Record the first day of each triple; report repeats. Returns the number
/// of distinct triples.
fn check_triples(solution: &Solution, issues: &mut Vec<Error>) -> usize {
    let mut first_seen: HashMap<[Point; 3], usize> = HashMap::new();

    for day in solution.days() {
        for triple in &day.triples {
            let key = triple.sorted();
            match first_seen.get(&key) {
                Some(&first_day) => issues.push(Error::DuplicateTriple {
                    triple: key,
                    first_day,
                    second_day: day.number,
                }),
                None => {
                    first_seen.insert(key, day.number);
                }
            }
        }
    }

    first_seen.len()
}

/// Count every pair of distinct points across all triples.
fn check_pairs(solution: &Solution, issues: &mut Vec<Error>) {
    let v = solution.order() as usize;
    let mut counts = vec![0usize; (v + 1) * (v + 1)];

    for triple in solution.days().iter().flat_map(|d| d.triples.iter()) {
        for (a, b) in triple.pairs() {
            let (a, b) = (a as usize, b as usize);
            if a != b && b <= v && a >= 1 {
                counts[a * (v + 1) + b] += 1;
            }
        }
    }

    for first in 1..=v {
        for second in first + 1..=v {
            let count = counts[first * (v + 1) + second];
            if count != 1 {
                issues.push(Error::PairCoverage {
                    first: first as Point,
                    second: second as Point,
                    count,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Triple;

    /// The affine plane AG(2, 3): the unique KTS(9).
    fn kts9() -> Solution {
        let days = [
            [[1, 2, 3], [4, 5, 6], [7, 8, 9]],
            [[1, 4, 7], [2, 5, 8], [3, 6, 9]],
            [[1, 5, 9], [2, 6, 7], [3, 4, 8]],
            [[1, 6, 8], [2, 4, 9], [3, 5, 7]],
        ];
        Solution::from_days(
            9,
            days.iter()
                .map(|day| day.iter().map(|&t| Triple::from(t)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_valid_kts9() {
        let result = verify_solution(&kts9());
        assert!(result.is_valid, "{:?}", result.issues);
        assert_eq!(result.days, 4);
        assert_eq!(result.distinct_triples, 12);
        assert!(kts9().verify().is_ok());
    }

    #[test]
    fn test_missing_point() {
        let solution = Solution::from_days(
            9,
            vec![vec![
                Triple::new(1, 2, 3),
                Triple::new(4, 5, 6),
                Triple::new(7, 8, 8),
            ]],
        );
        let result = verify_solution(&solution);
        assert!(!result.is_valid);
        assert_eq!(
            result.issues[0],
            Error::MissingPoints {
                day: 1,
                covered: 8,
                expected: 9
            }
        );
    }

    #[test]
    fn test_duplicate_triple() {
        let mut days: Vec<Vec<Triple>> = kts9().days().iter().map(|d| d.triples.clone()).collect();
        days.push(days[0].clone());
        let solution = Solution::from_days(9, days);

        let err = solution.verify().unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateTriple {
                triple: [1, 2, 3],
                first_day: 1,
                second_day: 5
            }
        );
    }

    #[test]
    fn test_pair_covered_twice() {
        // Every day is a partition, yet {1, 2} is covered twice
        let days = vec![
            vec![Triple::new(1, 2, 3), Triple::new(4, 5, 6), Triple::new(7, 8, 9)],
            vec![Triple::new(1, 2, 4), Triple::new(3, 5, 7), Triple::new(6, 8, 9)],
            vec![Triple::new(1, 5, 9), Triple::new(2, 6, 7), Triple::new(3, 4, 8)],
            vec![Triple::new(1, 6, 8), Triple::new(2, 4, 9), Triple::new(3, 5, 7)],
        ];
        let result = verify_solution(&Solution::from_days(9, days));
        assert!(!result.is_valid);
        assert!(result.issues.iter().any(|e| matches!(
            e,
            Error::PairCoverage {
                first: 1,
                second: 2,
                count: 2
            }
        )));
    }

    #[test]
    fn test_wrong_triple_total() {
        let days: Vec<Vec<Triple>> = kts9().days()[..3].iter().map(|d| d.triples.clone()).collect();
        let result = verify_solution(&Solution::from_days(9, days));
        assert!(result.issues.contains(&Error::TripleCount {
            distinct: 9,
            expected: 12
        }));
    }
}
