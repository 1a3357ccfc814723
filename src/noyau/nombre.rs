// src/noyau/nombre.rs
//
// Valeur exacte du noyau : rationnel de Gauss (re + im·j), sans flottants.
// - Add / Sub / Mul / Neg : opérations totales (std::ops)
// - diviser / modulo / puissance : opérations vérifiées (Result)
//
// IMPORTANT (SAFE):
// - Aucun BigRational::new avec un dénominateur venant de l'utilisateur :
//   toute division passe par diviser() (zéro vérifié avant).
// - puissance() borne l'exposant (EXPOSANT_MAX, anti-gel).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use std::ops::{Add, Mul, Neg, Sub};

use super::erreur::ErreurEval;

/// Garde-fou : borne sur les exposants (puissance et notation `e`).
pub(crate) const EXPOSANT_MAX: i64 = 16_384;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nombre {
    re: BigRational,
    im: BigRational,
}

impl Nombre {
    pub fn reel(r: BigRational) -> Nombre {
        Nombre {
            re: r,
            im: BigRational::zero(),
        }
    }

    pub fn imaginaire(r: BigRational) -> Nombre {
        Nombre {
            re: BigRational::zero(),
            im: r,
        }
    }

    pub fn un() -> Nombre {
        Nombre::reel(BigRational::one())
    }

    pub fn re(&self) -> &BigRational {
        &self.re
    }

    pub fn im(&self) -> &BigRational {
        &self.im
    }

    pub fn est_reel(&self) -> bool {
        self.im.is_zero()
    }

    pub fn est_nul(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Division exacte : (a+bj)/(c+dj) = (a+bj)(c-dj) / (c²+d²).
    pub fn diviser(&self, diviseur: &Nombre) -> Result<Nombre, ErreurEval> {
        if diviseur.est_nul() {
            return Err(ErreurEval::DivisionParZero);
        }

        // c²+d² > 0 dès que le diviseur est non nul
        let norme = &diviseur.re * &diviseur.re + &diviseur.im * &diviseur.im;

        let re = (&self.re * &diviseur.re + &self.im * &diviseur.im) / &norme;
        let im = (&self.im * &diviseur.re - &self.re * &diviseur.im) / &norme;

        Ok(Nombre { re, im })
    }

    /// Modulo "plancher" (convention Python) : a - b·⌊a/b⌋, reste du signe de b.
    /// Réels seulement : les opérandes complexes sont hors domaine.
    pub fn modulo(&self, diviseur: &Nombre) -> Result<Nombre, ErreurEval> {
        if !self.est_reel() || !diviseur.est_reel() {
            return Err(ErreurEval::ModuloComplexe);
        }
        if diviseur.re.is_zero() {
            return Err(ErreurEval::DivisionParZero);
        }

        let q = (&self.re / &diviseur.re).floor();
        let r = &self.re - &diviseur.re * q;
        Ok(Nombre::reel(r))
    }

    /// Puissance à exposant entier réel (exact).
    ///
    /// Conventions Python : 0**0 = 1 ; 0**n avec n < 0 = division par zéro.
    /// Exposant non entier ou non réel : hors domaine du noyau exact.
    pub fn puissance(&self, exposant: &Nombre) -> Result<Nombre, ErreurEval> {
        if !exposant.est_reel() || !exposant.re.is_integer() {
            return Err(ErreurEval::ExposantNonEntier);
        }

        let n = big_to_i64(&exposant.re.to_integer()).ok_or(ErreurEval::Debordement)?;
        if n.unsigned_abs() > EXPOSANT_MAX as u64 {
            return Err(ErreurEval::Debordement);
        }

        if n == 0 {
            return Ok(Nombre::un());
        }
        if n < 0 {
            let pos = self.puissance_entiere(n.unsigned_abs());
            return Nombre::un().diviser(&pos);
        }
        Ok(self.puissance_entiere(n.unsigned_abs()))
    }

    /// Exponentiation rapide (carrés successifs), fermée sur les Gauss.
    fn puissance_entiere(&self, exp: u64) -> Nombre {
        let mut e = exp;
        let mut acc = Nombre::un();
        let mut b = self.clone();

        while e > 0 {
            if (e & 1) == 1 {
                acc = acc * b.clone();
            }
            e >>= 1;
            if e > 0 {
                b = b.clone() * b.clone();
            }
        }
        acc
    }
}

impl Add for Nombre {
    type Output = Nombre;
    fn add(self, autre: Nombre) -> Nombre {
        Nombre {
            re: self.re + autre.re,
            im: self.im + autre.im,
        }
    }
}

impl Sub for Nombre {
    type Output = Nombre;
    fn sub(self, autre: Nombre) -> Nombre {
        Nombre {
            re: self.re - autre.re,
            im: self.im - autre.im,
        }
    }
}

impl Mul for Nombre {
    type Output = Nombre;
    fn mul(self, autre: Nombre) -> Nombre {
        // (a+bj)(c+dj) = (ac-bd) + (ad+bc)j
        let re = &self.re * &autre.re - &self.im * &autre.im;
        let im = &self.re * &autre.im + &self.im * &autre.re;
        Nombre { re, im }
    }
}

impl Neg for Nombre {
    type Output = Nombre;
    fn neg(self) -> Nombre {
        Nombre {
            re: -self.re,
            im: -self.im,
        }
    }
}

/// Conversion SAFE vers i64 (refuse au-delà).
fn big_to_i64(x: &BigInt) -> Option<i64> {
    x.to_string().parse::<i64>().ok()
}
