//! Irreducible polynomials for extension field construction.
//!
//! An irreducible polynomial of degree n over GF(p) is required to construct
//! GF(p^n). The polynomial is represented as a vector of coefficients
//! [c_0, c_1, ..., c_{n-1}] where the polynomial is:
//! x^n + c_{n-1}*x^{n-1} + ... + c_1*x + c_0
//!
//! The leading coefficient (for x^n) is always 1 and is implicit.
//!
//! Kirkman constructions need q ≡ 1 (mod 6), which rules out characteristic
//! 2 and 3 entirely, so the table only lists fields over p ≥ 5. Any other
//! (p, n) falls back to an exhaustive search.

/// Known irreducible polynomials, `(p, n, [c_0, ..., c_{n-1}])`.
pub static IRREDUCIBLE_POLYS: &[(u32, u32, &[u32])] = &[
    // x^2 + 2
    (5, 2, &[2, 0]),
    // x^4 + x^3 + x^2 + 1
    (5, 4, &[1, 0, 1, 1]),
    // x^2 + 1
    (7, 2, &[1, 0]),
    // x^3 + x^2 + 1
    (7, 3, &[1, 0, 1]),
    // x^2 + 1
    (11, 2, &[1, 0]),
    // x^2 + 2
    (13, 2, &[2, 0]),
    // x^2 + x + 1
    (17, 2, &[1, 1]),
    // x^2 + 1
    (19, 2, &[1, 0]),
    // x^2 + 1
    (23, 2, &[1, 0]),
];

/// Get an irreducible polynomial for GF(p^n).
///
/// Looks in [`IRREDUCIBLE_POLYS`] first, then searches monic polynomials in
/// lexicographic order of their coefficient vectors. Returns `None` only if
/// `p < 2` or `n == 0`.
#[must_use]
pub fn get_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    if p < 2 || n == 0 {
        return None;
    }

    IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(poly_p, poly_n, _)| poly_p == p && poly_n == n)
        .map(|&(_, _, coeffs)| coeffs.to_vec())
        .or_else(|| find_irreducible_poly(p, n))
}

/// Search for the first monic irreducible polynomial of degree n over GF(p).
#[must_use]
pub fn find_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    let candidates = u64::from(p).checked_pow(n)?;
    (0..candidates)
        .map(|code| digits(code, p, n as usize))
        .find(|coeffs| is_irreducible(coeffs, p))
}

/// Whether the monic polynomial with the given lower coefficients is
/// irreducible over GF(p).
///
/// Trial-divides by every monic polynomial of degree 1..=n/2.
#[must_use]
pub fn is_irreducible(coeffs: &[u32], p: u32) -> bool {
    let n = coeffs.len();
    if n == 0 {
        return false;
    }
    if coeffs[0] == 0 && n > 1 {
        // divisible by x
        return false;
    }

    let mut f = coeffs.to_vec();
    f.push(1);

    for degree in 1..=n / 2 {
        let count = u64::from(p).pow(degree as u32);
        for code in 0..count {
            let mut g = digits(code, p, degree);
            g.push(1);
            if poly_rem(&f, &g, p).iter().all(|&c| c == 0) {
                return false;
            }
        }
    }

    true
}

/// Base-p digits of `code`, least significant first, padded to `len`.
fn digits(mut code: u64, p: u32, len: usize) -> Vec<u32> {
    let p = u64::from(p);
    (0..len)
        .map(|_| {
            let d = (code % p) as u32;
            code /= p;
            d
        })
        .collect()
}

/// Remainder of `f` divided by the monic polynomial `g` over GF(p).
fn poly_rem(f: &[u32], g: &[u32], p: u32) -> Vec<u32> {
    let mut rem = f.to_vec();
    let g_deg = g.len() - 1;

    while rem.len() > g_deg {
        let lead = rem[rem.len() - 1];
        let shift = rem.len() - 1 - g_deg;
        if lead != 0 {
            for (j, &gc) in g.iter().enumerate() {
                let sub = ((u64::from(lead) * u64::from(gc)) % u64::from(p)) as u32;
                rem[shift + j] = (rem[shift + j] + p - sub) % p;
            }
        }
        rem.pop();
    }

    rem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_are_irreducible() {
        for &(p, n, coeffs) in IRREDUCIBLE_POLYS {
            assert_eq!(coeffs.len() as u32, n);
            assert!(is_irreducible(coeffs, p), "table entry for GF({}^{})", p, n);
        }
    }

    #[test]
    fn test_get_irreducible_poly() {
        assert_eq!(get_irreducible_poly(5, 2), Some(vec![2, 0]));
        assert_eq!(get_irreducible_poly(7, 2), Some(vec![1, 0]));
        assert!(get_irreducible_poly(1, 2).is_none());
        assert!(get_irreducible_poly(5, 0).is_none());
    }

    #[test]
    fn test_search_fallback() {
        // GF(29^2) is not tabulated
        let poly = get_irreducible_poly(29, 2).unwrap();
        assert_eq!(poly.len(), 2);
        assert!(is_irreducible(&poly, 29));

        // GF(31^3)
        let poly = find_irreducible_poly(31, 3).unwrap();
        assert!(is_irreducible(&poly, 31));
    }

    #[test]
    fn test_reducible_polynomials() {
        // x^2 + 4 = (x + 1)(x + 4) over GF(5)
        assert!(!is_irreducible(&[4, 0], 5));
        // x^2 - 1 over GF(7)
        assert!(!is_irreducible(&[6, 0], 7));
        // (x^2 + 2)^2 over GF(5) has no linear factor
        assert!(!is_irreducible(&[4, 0, 4, 0], 5));
    }
}
