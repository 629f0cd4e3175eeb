//! Static field declarations, mirroring the fine-tuning dataset.
//!
//! Relevance lists are in model vocabulary and ranked most relevant first.
//! Changing any list here changes the prompts the model sees.

use super::schema;
use super::{FieldKind, FieldSpec};

/// Fields always included, in this order, whatever the strategy.
pub const BASE_FIELDS: &[&str] = &["client", "secteur", "typeProjet", "complexite", "libelle", "annee"];

/// Canonical generation order; also the exploration pool.
pub const GENERATION_ORDER: &[&str] = &[
    "contexte_proj",
    "besoin",
    "objectifs",
    "perimetre",
    "horsPerimetre",
    "contraintes",
    "risques",
    "descriptionSolution",
    "architecture",
    "composantsDimensionnement",
    "phases",
    "jalons",
    "livrables",
    "conditionsHorsCrash",
    "conditionsCrashSite",
    "resilienceApplicative",
    "praPlanDegrade",
    "sauvegardes",
    "administrationSupervision",
    "impactCO2",
    "modalitesPartage",
    "coutsConstruction",
    "coutsFonctionnement",
];

const fn input(name: &'static str, model_name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        model_name,
        kind: FieldKind::Scalar,
        generatable: false,
        relevant_fields: &[],
    }
}

const fn scalar(name: &'static str, relevant_fields: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        name,
        model_name: name,
        kind: FieldKind::Scalar,
        generatable: true,
        relevant_fields,
    }
}

const fn table(
    name: &'static str,
    model_name: &'static str,
    schema: schema::TableSchema,
    relevant_fields: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        name,
        model_name,
        kind: FieldKind::Table(schema),
        generatable: true,
        relevant_fields,
    }
}

pub const FIELDS: &[FieldSpec] = &[
    // Identity and classification (base fields).
    input("client", "client"),
    input("sector", "secteur"),
    input("project_type", "typeProjet"),
    input("complexity", "complexite"),
    input("libelle", "libelle"),
    input("annee", "annee"),
    // Inputs referenced by relevance lists, never generated.
    input("plageService", "plageService"),
    input("dicp", "dicp"),
    input("dima", "dima"),
    input("pdma", "pdma"),
    input("rgpd", "rgpd"),
    input("psee", "psee"),
    input("lienDocumentation", "lienDocumentation"),
    input("tauxContingence", "tauxContingence"),
    // Generatable fields.
    FieldSpec {
        name: "contexte",
        model_name: "contexte_proj",
        kind: FieldKind::Scalar,
        generatable: true,
        relevant_fields: &["besoin", "objectifs"],
    },
    scalar("besoin", &["contexte_proj", "objectifs", "perimetre"]),
    scalar("objectifs", &["contexte_proj", "besoin", "perimetre"]),
    scalar("perimetre", &["contexte_proj", "besoin", "objectifs", "horsPerimetre"]),
    scalar("horsPerimetre", &["perimetre", "contexte_proj"]),
    table("contraintes", "contraintes", schema::CONTRAINTES, &["contexte_proj", "besoin", "complexite"]),
    table("risques", "risques", schema::RISQUES, &["contraintes", "contexte_proj", "objectifs"]),
    scalar("descriptionSolution", &["besoin", "objectifs", "architecture"]),
    scalar("architecture", &["descriptionSolution", "besoin", "composantsDimensionnement"]),
    scalar("composantsDimensionnement", &["architecture", "perimetre", "plageService"]),
    table("lots", "phases", schema::PHASES, &["perimetre", "objectifs", "complexite"]),
    table("jalons", "jalons", schema::JALONS, &["phases", "livrables", "objectifs"]),
    table("livrables", "livrables", schema::LIVRABLES, &["phases", "objectifs", "perimetre"]),
    scalar("conditionsHorsCrash", &["architecture", "plageService", "resilienceApplicative"]),
    scalar("conditionsCrashSite", &["conditionsHorsCrash", "dicp", "dima", "pdma"]),
    scalar("resilienceApplicative", &["architecture", "conditionsHorsCrash", "praPlanDegrade"]),
    scalar("praPlanDegrade", &["resilienceApplicative", "dicp", "dima"]),
    scalar("sauvegardes", &["pdma", "rgpd", "administrationSupervision"]),
    scalar("administrationSupervision", &["plageService", "tauxContingence"]),
    scalar("impactCO2", &["composantsDimensionnement", "architecture"]),
    scalar("modalitesPartage", &["rgpd", "psee", "lienDocumentation"]),
    table(
        "coutsConstruction",
        "coutsConstruction",
        schema::COUTS_CONSTRUCTION,
        &["phases", "perimetre", "complexite"],
    ),
    table(
        "coutsFonctionnement",
        "coutsFonctionnement",
        schema::COUTS_FONCTIONNEMENT,
        &["coutsConstruction", "architecture", "administrationSupervision"],
    ),
];
