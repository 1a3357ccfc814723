// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurEval;
use super::nombre::{Nombre, EXPOSANT_MAX};

#[derive(Clone, Debug)]
pub enum Tok {
    Num(Nombre),

    // Identifiants (tout ce qui n'est ni nombre, ni opérateur, ni parenthèse)
    // NOTE: aucun nom n'est lié dans ce noyau; l'évaluation les rejette (NomInconnu).
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    DoubleStar, // **

    // Moins unaire: jamais produit par tokenize, posé par l'étape RPN.
    Neg,

    LPar,
    RPar,
}

/// Découpe une chaîne en jetons. Grammaire couverte :
/// - littéraux décimaux (12, 3.5, 1., .5), exposant e/E signé (2e3, 1e-2),
///   suffixe imaginaire j (2j, 1.5e2j)
/// - opérateurs + - * / % ** et parenthèses
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]*, normalisés en minuscules
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs (`**` avant `*`)
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::DoubleStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiant : premier caractère lettre ou '_'
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Littéral décimal : chiffres [. chiffres] [e±chiffres] [j]
        if c.is_ascii_digit() || c == '.' {
            // partie entière
            let mut entier = String::new();
            while i < chars.len() && chars[i].is_ascii_digit() {
                entier.push(chars[i]);
                i += 1;
            }

            // partie fractionnaire ("1." et ".5" sont valides, "." seul non)
            let mut frac = String::new();
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    frac.push(chars[i]);
                    i += 1;
                }
            }
            if entier.is_empty() && frac.is_empty() {
                return Err(ErreurEval::Syntaxe("caractère inattendu: '.'".into()));
            }

            // exposant décimal : e ou E, signe optionnel, au moins un chiffre
            let mut exp: i64 = 0;
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                let mut negatif = false;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    negatif = chars[j] == '-';
                    j += 1;
                }
                let debut = j;
                while j < chars.len() && chars[j].is_ascii_digit() {
                    j += 1;
                }
                if debut == j {
                    return Err(ErreurEval::Syntaxe("exposant décimal incomplet".into()));
                }
                let chiffres: String = chars[debut..j].iter().collect();
                let v: i64 = chiffres.parse().map_err(|_| ErreurEval::Debordement)?;
                if v > EXPOSANT_MAX {
                    return Err(ErreurEval::Debordement);
                }
                exp = if negatif { -v } else { v };
                i = j;
            }

            // suffixe imaginaire
            let mut imaginaire = false;
            if i < chars.len() && (chars[i] == 'j' || chars[i] == 'J') {
                imaginaire = true;
                i += 1;
            }

            // un littéral ne se colle pas à un identifiant ("2x", "3j5"…)
            if i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                return Err(ErreurEval::Syntaxe(format!(
                    "littéral invalide près de '{}'",
                    chars[i]
                )));
            }

            let chiffres = format!("{entier}{frac}");
            let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
                .ok_or_else(|| ErreurEval::Syntaxe("nombre invalide".into()))?;

            // dénominateur 10^len(frac), jamais nul
            let mut rat = if frac.is_empty() {
                BigRational::from_integer(n)
            } else {
                BigRational::new(n, pow10(frac.len() as u64))
            };

            if exp != 0 {
                let p = BigRational::from_integer(pow10(exp.unsigned_abs()));
                rat = if exp > 0 { rat * p } else { rat / p };
            }

            out.push(Tok::Num(if imaginaire {
                Nombre::imaginaire(rat)
            } else {
                Nombre::reel(rat)
            }));
            continue;
        }

        return Err(ErreurEval::Syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/* ------------------------ Outil interne (Pow10) ------------------------ */

// SAFE: k vient d'EXPOSANT_MAX ou de la longueur de la saisie, le cast u32 ne tronque pas.
fn pow10(k: u64) -> BigInt {
    BigInt::from(10).pow(k as u32)
}
