//! Tests arithmétiques (campagne) : conventions + exactitude + limites contrôlées.
//!
//! But : vérifier les conventions d'évaluation et les bornes sans faire
//! chauffer la machine.
//! - budget temps global
//! - tailles bornées (longueur, exposants)
//! - aucune comparaison flottante : que du texte exact

use std::time::{Duration, Instant};

use super::evaluer;
use super::format::format_nombre;

fn texte(expr: &str) -> String {
    let v = evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format_nombre(&v)
}

fn assert_valeur(expr: &str, attendu: &str) {
    assert_eq!(texte(expr), attendu, "expr={expr:?}");
}

fn assert_etiquette(expr: &str, attendue: &str) {
    match evaluer(expr) {
        Ok(v) => panic!("expr={expr:?} devait échouer, a donné {v:?}"),
        Err(e) => assert_eq!(e.etiquette(), attendue, "expr={expr:?}"),
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Conventions (précédences) ------------------------ */

#[test]
fn ari_precedences_python() {
    assert_valeur("2+3*4", "14");
    assert_valeur("100/10/5", "2");
    assert_valeur("2**3**2", "512");
    assert_valeur("-2**2", "-4");
    assert_valeur("2**-3", "0.125");
    assert_valeur("-7%3", "2");
    assert_valeur("2--3", "5");
}

/* ------------------------ Modulo plancher ------------------------ */

#[test]
fn ari_modulo_table_des_signes() {
    // reste du signe du diviseur
    assert_valeur("7%3", "1");
    assert_valeur("-7%3", "2");
    assert_valeur("7%-3", "-2");
    assert_valeur("-7%-3", "-1");
}

#[test]
fn ari_modulo_rationnels() {
    assert_valeur("7.5%2", "1.5");
    assert_valeur("-7.5%2", "0.5");
    // exact: pas d'arrondi binaire sur 0.3
    assert_valeur("1%0.3", "0.1");
}

/* ------------------------ Identités exactes ------------------------ */

#[test]
fn ari_zero_algebrique() {
    assert_valeur("(1/3)*3", "1");
    assert_valeur("0.1+0.2-0.3", "0");
    assert_valeur("1/7+6/7", "1");
    assert_valeur("(2/3)/(2/3)", "1");
}

#[test]
fn ari_puissances() {
    assert_valeur("2**10", "1024");
    assert_valeur("2**60", "1152921504606846976");
    assert_valeur("(2**30)*(2**30)", &texte("2**60"));
    assert_valeur("0**0", "1");
    assert_valeur("0**5", "0");
}

#[test]
fn ari_gauss() {
    assert_valeur("1j**2", "-1");
    assert_valeur("(3+4j)*(3-4j)", "25");
    assert_valeur("(1+1j)**8", "16");
    assert_valeur("1/(1+1j)", "(0.5-0.5j)");
    assert_valeur("(2j)**2", "-4");
    assert_valeur("2j/2", "1j");
}

/* ------------------------ Rendu (conversion native) ------------------------ */

#[test]
fn ari_rendu_decimal_exact() {
    // dénominateur 2^a·5^b => décimal fini sans zéro final
    assert_valeur("1/8", "0.125");
    assert_valeur("1/4000", "0.00025");
    assert_valeur("1/2**10", "0.0009765625");
    assert_valeur("-1/2", "-0.5");

    // sinon: fraction réduite
    assert_valeur("1/6", "1/6");
    assert_valeur("22/7", "22/7");
    assert_valeur("2/6", "1/3");
}

/* ------------------------ Étiquettes par famille ------------------------ */

#[test]
fn ari_etiquettes_erreurs() {
    assert_etiquette("", "Erreur de syntaxe");
    assert_etiquette("2+", "Erreur de syntaxe");
    assert_etiquette("_", "Nom inconnu");
    assert_etiquette("1/0", "Division par zéro");
    assert_etiquette("0**-2", "Division par zéro");
    assert_etiquette("1j%1j", "Opération invalide");
    assert_etiquette("2**(1/2)", "Exposant non entier");
    assert_etiquette("2**20000", "Débordement");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn ari_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // gros numérateur contrôlé (100 chiffres) : (10^100 - 1)/7 + 1/7 = 10^100/7
    let big = "9".repeat(100);
    let expr = format!("{big}/7+1/7");
    budget(t0, max);

    let sortie = texte(&expr);
    budget(t0, max);
    assert!(sortie.starts_with('1') && sortie.ends_with("/7"), "sortie={sortie}");
}

#[test]
fn ari_stress_puissance_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    // dans la borne : réponse exacte (≈4933 chiffres), rapide
    let sortie = texte("2**16384");
    budget(t0, max);
    assert!(sortie.len() > 4000);

    // au-delà : refus net, pas de gel
    assert_etiquette("2**16385", "Débordement");
    budget(t0, max);
}

#[test]
fn ari_stress_longueur_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 400 termes (évaluation itérative, pas de pile à protéger)
    let mut expr = String::from("1");
    for _ in 0..399 {
        expr.push_str("+1");
    }
    budget(t0, max);
    assert_valeur(&expr, "400");

    // 300 parenthèses imbriquées
    let profonde = format!("{}7{}", "(".repeat(300), ")".repeat(300));
    budget(t0, max);
    assert_valeur(&profonde, "7");
}
