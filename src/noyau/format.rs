// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::nombre::Nombre;

/* ------------------------ Helpers rationnels ------------------------ */

fn pow10(k: u32) -> BigInt {
    BigInt::from(10).pow(k)
}

/// Dénominateur de la forme 2^a·5^b -> nombre de décimales exactes max(a,b).
/// Sinon None (le décimal serait périodique).
fn decimales_exactes(d: &BigInt) -> Option<u32> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    // d > 0 : BigRational normalise le signe au numérateur
    let mut reste = d.clone();
    let mut a: u32 = 0;
    let mut b: u32 = 0;

    while (&reste % &deux).is_zero() {
        reste /= &deux;
        a += 1;
    }
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        b += 1;
    }

    if reste.is_one() {
        Some(a.max(b))
    } else {
        None
    }
}

/// Entier “scalé” (×10^k) -> texte décimal à k décimales (zéros de tête gardés).
fn scaled_en_decimal(mut scaled: BigInt, k: u32) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(k);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while (frac.len() as u32) < k {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Rationnel -> texte : entier, décimal fini exact, sinon fraction n/d.
fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();

    if d.is_one() {
        return format!("{n}");
    }

    if let Some(k) = decimales_exactes(d) {
        // n·10^k/d est entier : décimal fini, aucun arrondi
        // (k = max(a,b) est minimal, donc pas de zéro final)
        let scaled = (n * pow10(k)) / d;
        return scaled_en_decimal(scaled, k);
    }

    format!("{n}/{d}")
}

/* ------------------------ Partie imaginaire ------------------------ */

/// coeff·j : "1j", "-1j", "2.5j", "(1/3)j" (coefficient toujours écrit,
/// fraction parenthésée pour ne pas lire "1/3j" comme 1/(3j)).
fn format_coeff_j(coeff: &BigRational) -> String {
    let c = format_rat(coeff);
    if c.contains('/') {
        format!("({c})j")
    } else {
        format!("{c}j")
    }
}

/* ------------------------ Conversion native ------------------------ */

/// Nombre -> texte, sans arrondi :
/// - réel : "4", "0.5", "-2/3"
/// - imaginaire pur : "1j", "2.5j"
/// - mixte : "(1+2j)", "(1-2j)" (parenthésé, le '-' porté par la partie j)
pub fn format_nombre(x: &Nombre) -> String {
    if x.est_reel() {
        return format_rat(x.re());
    }

    if x.re().is_zero() {
        return format_coeff_j(x.im());
    }

    let re = format_rat(x.re());
    if x.im().is_negative() {
        // signe porté par le séparateur, coefficient en valeur absolue
        // (sinon "(1(-1/3)j)" au lieu de "(1-(1/3)j)")
        let im = format_coeff_j(&x.im().abs());
        format!("({re}-{im})")
    } else {
        let im = format_coeff_j(x.im());
        format!("({re}+{im})")
    }
}
