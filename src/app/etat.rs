//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du formulaire (six champs, valeurs lues, dérivées,
//! formule, sortie, avertissement, démarche) et les actions des boutons.
//!
//! Contrats :
//! - Les champs texte sont la source ; `valeurs` en est la lecture (`lire_nombre`).
//! - Toute action qui touche aux valeurs finit par `recalculer()`.
//! - Aucun affichage ici.

use rand::Rng;

use crate::noyau::format::{format_nombre, lire_nombre};
use crate::noyau::{
    calculer_derives, evaluer_formule_detaillee, Demarche, Derives, Variable, Variables,
};

/// Clé de stockage des six valeurs (partagée entre sessions).
pub const CLE_STOCKAGE: &str = "simple_assessment_values_v1";

/// Bornes du bouton "Random" (incluses).
const ALEA_MIN: u32 = 1;
const ALEA_MAX: u32 = 90;

/// Sortie affichée quand il n’y a pas de valeur.
pub const SORTIE_VIDE: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Evaluation,
    Formule,
}

#[derive(Clone, Debug)]
pub struct AppFormulaire {
    pub page: Page,

    // --- entrées utilisateur ---
    pub saisies: [String; 6], // ordre de Variable::TOUTES
    pub formule: String,

    // --- lectures / sorties ---
    pub valeurs: Variables,
    pub derives: Derives,
    pub sortie: String,        // valeur de la formule, ou "-"
    pub avertissement: String, // message d’erreur de la formule (vide = caché)
    pub demarche: Demarche,

    // --- UX ---
    pub focus_formule: bool,
}

impl Default for AppFormulaire {
    fn default() -> Self {
        Self::depuis_valeurs(Variables::default())
    }
}

impl AppFormulaire {
    /// État initial à partir de valeurs (sauvegardées ou d’exemple).
    pub fn depuis_valeurs(valeurs: Variables) -> Self {
        let mut app = Self {
            page: Page::default(),
            saisies: Default::default(),
            formule: String::new(),
            valeurs,
            derives: calculer_derives(&valeurs),
            sortie: SORTIE_VIDE.to_string(),
            avertissement: String::new(),
            demarche: Demarche::default(),
            focus_formule: false,
        };
        app.appliquer_valeurs(valeurs);
        app
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Recopie des valeurs dans les champs, puis recalcul.
    pub fn appliquer_valeurs(&mut self, valeurs: Variables) {
        for (saisie, v) in self.saisies.iter_mut().zip(Variable::TOUTES) {
            *saisie = format_nombre(valeurs.get(v));
        }
        self.valeurs = valeurs;
        self.recalculer();
    }

    /// Un champ a changé : relit les six champs puis recalcule.
    pub fn maj_depuis_saisies(&mut self) {
        let saisies = &self.saisies;
        self.valeurs = Variables::depuis_fn(|v| lire_nombre(&saisies[v.index()]));
        self.recalculer();
    }

    /// "Reset" : jeu d’exemple.
    pub fn reset(&mut self) {
        log::info!("reset des valeurs");
        self.appliquer_valeurs(Variables::default());
    }

    /// "Random" : chaque valeur tirée dans [ALEA_MIN, ALEA_MAX].
    pub fn aleatoire(&mut self) {
        self.aleatoire_avec(&mut rand::thread_rng());
    }

    pub fn aleatoire_avec(&mut self, rng: &mut impl Rng) {
        let valeurs = Variables::depuis_fn(|_| f64::from(rng.gen_range(ALEA_MIN..=ALEA_MAX)));
        log::info!("valeurs aléatoires: {valeurs:?}");
        self.appliquer_valeurs(valeurs);
    }

    /// Dérivées + formule, à partir de `valeurs`.
    pub fn recalculer(&mut self) {
        self.derives = calculer_derives(&self.valeurs);
        self.evaluer_formule();
    }

    /// Évalue la formule via le noyau, puis dépose sortie / avertissement / démarche.
    pub fn evaluer_formule(&mut self) {
        match evaluer_formule_detaillee(&self.formule, &self.valeurs) {
            Ok((v, demarche)) => {
                self.sortie = format_nombre(v);
                self.avertissement.clear();
                self.demarche = demarche;
            }
            Err(e) => {
                // Choix UX : pas de dernière valeur “fantôme” si la formule est fausse.
                self.sortie = SORTIE_VIDE.to_string();
                self.avertissement = e.to_string();
                self.demarche = Demarche::default();
            }
        }
        self.focus_formule = true;
    }

    /// ESC : formule vide, et la page le montre tout de suite (consigne, "-").
    pub fn effacer_formule(&mut self) {
        self.formule.clear();
        self.evaluer_formule();
    }
}
