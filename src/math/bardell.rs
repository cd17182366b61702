//! Hierarchical polynomial shape functions for Ritz plate models
//!
//! References:
//! - N.S. Bardell, "Free vibration analysis of a flat plate using the
//!   hierarchical finite element method", Journal of Sound and Vibration, 1991
//!
//! The first four terms are cubic edge functions: translation and rotation
//! at xi = -1, translation and rotation at xi = +1. Each is multiplied by the
//! matching boundary coefficient (`t1`, `r1`, `t2`, `r2`), so a coefficient of
//! 1.0 keeps the edge degree of freedom and 0.0 removes it. Higher terms
//! vanish with zero slope at both ends and are not affected by the
//! coefficients.

use super::shape::ShapeFunctions;
use crate::elements::EdgeRestraints;

/// Number of terms tabulated by [`Bardell::new`]
pub const MAX_TERMS: usize = 30;

/// Tabulated hierarchical polynomials and their pairwise integrals
#[derive(Debug, Clone)]
pub struct Bardell {
    /// Monomial coefficients of each term, lowest power first
    coeffs: Vec<Vec<f64>>,
    /// Derivative coefficients of each term, lowest power first
    dcoeffs: Vec<Vec<f64>>,
    /// Unscaled integral over [-1, 1] of each product of two terms
    integrals: Vec<f64>,
}

impl Bardell {
    pub fn new() -> Self {
        let coeffs: Vec<Vec<f64>> = (0..MAX_TERMS).map(term_coefficients).collect();
        let dcoeffs = coeffs
            .iter()
            .map(|c| {
                c.iter()
                    .enumerate()
                    .skip(1)
                    .map(|(p, &ci)| p as f64 * ci)
                    .collect()
            })
            .collect();

        let mut integrals = vec![0.0; MAX_TERMS * MAX_TERMS];
        for i in 0..MAX_TERMS {
            for j in i..MAX_TERMS {
                let value = product_integral(&coeffs[i], &coeffs[j]);
                integrals[i * MAX_TERMS + j] = value;
                integrals[j * MAX_TERMS + i] = value;
            }
        }

        Self {
            coeffs,
            dcoeffs,
            integrals,
        }
    }
}

impl Default for Bardell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeFunctions for Bardell {
    fn max_terms(&self) -> Option<usize> {
        Some(MAX_TERMS)
    }

    fn f(&self, i: usize, xi: f64, edges: &EdgeRestraints) -> f64 {
        edge_scale(i, edges) * horner(&self.coeffs[i], xi)
    }

    fn fxi(&self, i: usize, xi: f64, edges: &EdgeRestraints) -> f64 {
        edge_scale(i, edges) * horner(&self.dcoeffs[i], xi)
    }

    fn integral_ff(
        &self,
        i: usize,
        j: usize,
        edges_i: &EdgeRestraints,
        edges_j: &EdgeRestraints,
    ) -> f64 {
        edge_scale(i, edges_i) * edge_scale(j, edges_j) * self.integrals[i * MAX_TERMS + j]
    }
}

fn edge_scale(i: usize, edges: &EdgeRestraints) -> f64 {
    match i {
        0 => edges.t1,
        1 => edges.r1,
        2 => edges.t2,
        3 => edges.r2,
        _ => 1.0,
    }
}

/// Monomial coefficients of term `i` (0-based)
fn term_coefficients(i: usize) -> Vec<f64> {
    match i {
        0 => vec![0.5, -0.75, 0.0, 0.25],
        1 => vec![0.125, -0.125, -0.125, 0.125],
        2 => vec![0.5, 0.75, 0.0, -0.25],
        3 => vec![-0.125, -0.125, 0.125, 0.125],
        _ => {
            // 1-based order r >= 5, degree r - 1
            let r = i as i64 + 1;
            let mut c = vec![0.0; i + 1];
            let mut n = 0i64;
            while r - 2 * n - 1 >= 0 {
                let power = r - 2 * n - 1;
                let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                c[power as usize] = sign * double_factorial(2 * r - 2 * n - 7)
                    / (2f64.powi(n as i32) * factorial(n) * factorial(power));
                n += 1;
            }
            c
        }
    }
}

fn factorial(k: i64) -> f64 {
    (2..=k).fold(1.0, |acc, v| acc * v as f64)
}

/// Double factorial, with (-1)!! = 1
fn double_factorial(k: i64) -> f64 {
    let mut acc = 1.0;
    let mut v = k;
    while v > 1 {
        acc *= v as f64;
        v -= 2;
    }
    acc
}

#[inline]
fn horner(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// Exact integral over [-1, 1] of the product of two polynomials
fn product_integral(p: &[f64], q: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (a, &pa) in p.iter().enumerate() {
        for (b, &qb) in q.iter().enumerate() {
            if (a + b) % 2 == 0 {
                sum += pa * qb * 2.0 / (a + b + 1) as f64;
            }
        }
    }
    sum
}
