//! Tests fuzz safe : le pipeline encaisse tout, sans geler.
//!
//! Trois angles, tous déterministes (RNG à graine fixe, budgets temps) :
//! - grammaire bien formée : l'issue est une valeur ou une erreur de
//!   domaine (division par zéro, modulo complexe, exposant, débordement),
//!   jamais une faute de syntaxe
//! - même graine, mêmes sorties (campagne rejouée deux fois)
//! - chaînes brutes (alphabet clavier + intrus) : jamais de panique

use std::time::{Duration, Instant};

use super::format::format_nombre;
use super::{evaluer, ErreurEval};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_de_domaine(e: &ErreurEval) -> bool {
    // Liste blanche : erreurs *normales* sur une grammaire bien formée.
    matches!(
        e,
        ErreurEval::DivisionParZero
            | ErreurEval::ModuloComplexe
            | ErreurEval::ExposantNonEntier
            | ErreurEval::Debordement
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => format!("{}j", rng.pick(5)),
        4 => format!("{}e{}", 1 + rng.pick(9), rng.pick(4)),
        5 => ".5".to_string(),
        _ => format!("{}", 1 + rng.pick(99)),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(8) {
        0 => gen_atome(rng),
        1..=5 => {
            // binaire parenthésé, opérateur tiré au sort
            let op = ['+', '-', '*', '/', '%'][rng.pick(5) as usize];
            let gauche = gen_expr(rng, profondeur - 1);
            let droite = gen_expr(rng, profondeur - 1);
            format!("({gauche}{op}{droite})")
        }
        6 => format!("(-{})", gen_expr(rng, profondeur - 1)),
        // exposant littéral borné : la croissance reste contrôlée
        _ => format!("({}**{})", gen_expr(rng, profondeur - 1), rng.pick(4)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_grammaire_sans_faute_de_syntaxe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xA1EA_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evaluer(&expr) {
            Ok(_) => vus_ok += 1,
            Err(e) => {
                // Une grammaire bien formée ne produit jamais de faute de syntaxe.
                assert!(
                    est_erreur_de_domaine(&e),
                    "erreur hors liste blanche: expr={expr:?} err={e}"
                );
                vus_err += 1;
            }
        }
    }

    // Les deux issues doivent apparaître, sinon la campagne ne couvre rien.
    assert!(vus_ok > 20, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur de domaine rencontrée");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    fn campagne() -> Vec<String> {
        let mut rng = Rng::new(0xF1DE1E_u64);
        let mut sorties = Vec::new();
        for _ in 0..60 {
            let expr = gen_expr(&mut rng, 3);
            let sortie = match evaluer(&expr) {
                Ok(v) => format_nombre(&v),
                Err(e) => e.etiquette().to_string(),
            };
            sorties.push(format!("{expr} => {sortie}"));
        }
        sorties
    }

    let a = campagne();
    budget(t0, max);
    let b = campagne();
    budget(t0, max);

    assert_eq!(a, b, "même graine => mêmes sorties");
}

#[test]
fn fuzz_safe_entrees_brutes_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    // alphabet clavier + intrus
    const ALPHABET: &[u8] = b"0123456789.+-*/%()je_ ^#";

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let long = 1 + rng.pick(24) as usize;
        let mut s = String::new();
        for _ in 0..long {
            let k = rng.pick(ALPHABET.len() as u32) as usize;
            s.push(ALPHABET[k] as char);
        }

        // une issue par Result, quelle qu'elle soit
        let _ = evaluer(&s);
    }

    // quelques cas pathologiques fixes
    let fixes = [
        "((((((((", "))))))))", "........", "eeeeeee", "jjj", "%%%", "**", "2**", "_%_", "",
    ];
    for s in fixes {
        let _ = evaluer(s);
    }
}
