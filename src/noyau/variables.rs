// src/noyau/variables.rs
//
// Les six entrées nommées du formulaire et leurs valeurs.

use serde::{Deserialize, Serialize};

/// Identifiant de variable. Ensemble fermé, noms canoniques en majuscules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variable {
    A5,
    A7,
    A12,
    A13,
    A15,
    A20,
}

impl Variable {
    /// Ordre d’affichage (= ordre du formulaire).
    pub const TOUTES: [Variable; 6] = [
        Variable::A5,
        Variable::A7,
        Variable::A12,
        Variable::A13,
        Variable::A15,
        Variable::A20,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Variable::A5 => "A5",
            Variable::A7 => "A7",
            Variable::A12 => "A12",
            Variable::A13 => "A13",
            Variable::A15 => "A15",
            Variable::A20 => "A20",
        }
    }

    /// Position dans `TOUTES`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Insensible à la casse : "a12" -> A12.
    pub fn depuis_nom(nom: &str) -> Option<Variable> {
        Variable::TOUTES
            .into_iter()
            .find(|v| v.nom().eq_ignore_ascii_case(nom))
    }
}

/// Valeurs liées aux six variables pour une évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Variables {
    pub a5: f64,
    pub a7: f64,
    pub a12: f64,
    pub a13: f64,
    pub a15: f64,
    pub a20: f64,
}

impl Default for Variables {
    /// Jeu d’exemple : chaque variable vaut son propre numéro.
    fn default() -> Self {
        Self {
            a5: 5.0,
            a7: 7.0,
            a12: 12.0,
            a13: 13.0,
            a15: 15.0,
            a20: 20.0,
        }
    }
}

impl Variables {
    pub fn get(&self, v: Variable) -> f64 {
        match v {
            Variable::A5 => self.a5,
            Variable::A7 => self.a7,
            Variable::A12 => self.a12,
            Variable::A13 => self.a13,
            Variable::A15 => self.a15,
            Variable::A20 => self.a20,
        }
    }

    pub fn set(&mut self, v: Variable, valeur: f64) {
        let slot = match v {
            Variable::A5 => &mut self.a5,
            Variable::A7 => &mut self.a7,
            Variable::A12 => &mut self.a12,
            Variable::A13 => &mut self.a13,
            Variable::A15 => &mut self.a15,
            Variable::A20 => &mut self.a20,
        };
        *slot = valeur;
    }

    /// Construit depuis une fonction `Variable -> f64` (ex: tirage aléatoire).
    pub fn depuis_fn(mut f: impl FnMut(Variable) -> f64) -> Self {
        let mut vars = Self::default();
        for v in Variable::TOUTES {
            vars.set(v, f(v));
        }
        vars
    }
}
