//! `repsAndCerts` section: FAR and DFARS provision responses, financial
//! assistance certifications, and links to the rendered PDFs.
//!
//! ## Unparsed upstream lists
//!
//! Answers in the live API can carry further lists (end products, foreign
//! government entities, former firms, FSC info, joint ventures, labor
//! surplus concerns, NAICS, predecessors, SAM facilities, SAM points of
//! contact, services revenues, software, URLs). Only the lists below are
//! declared; the rest are skipped like any unknown key. Add them as callers
//! need them.

use serde::{Deserialize, Serialize};

use crate::de;

// -- Section and certification groups -----------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepsAndCerts {
    #[serde(deserialize_with = "de::object")]
    pub certifications: Certifications,
    #[serde(deserialize_with = "de::object")]
    pub qualifications: Qualifications,
    #[serde(deserialize_with = "de::object")]
    pub financial_assistance_certifications: FinancialAssistanceCertifications,
    #[serde(deserialize_with = "de::object")]
    pub pdf_links: PdfLinks,
}

/// FAR and DFARS provision responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certifications {
    #[serde(rename = "fARResponses", deserialize_with = "de::objects")]
    pub far_responses: Vec<FarResponse>,
    /// Upstream spells this key with a lowercase `d`.
    #[serde(rename = "dFARResponses", deserialize_with = "de::objects")]
    pub dfars_responses: Vec<DfarsResponse>,
}

impl Certifications {
    /// The FAR response for `provision_id` (e.g. `FAR 52.209-2`).
    pub fn far_response(&self, provision_id: &str) -> Option<&FarResponse> {
        self.far_responses.iter().find(|r| r.provision_id == provision_id)
    }

    /// The DFARS response for `provision_id` (e.g. `DFARS 252.209-7002`).
    pub fn dfars_response(&self, provision_id: &str) -> Option<&DfarsResponse> {
        self.dfars_responses.iter().find(|r| r.provision_id == provision_id)
    }
}

/// Architect-engineer qualifications.
///
/// `architectEngineerResponses` is not parsed; the record only exists so the
/// key is accepted and re-encoded as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Qualifications {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialAssistanceCertifications {
    #[serde(deserialize_with = "de::nullable")]
    pub grants_certification_status: String,
    #[serde(deserialize_with = "de::nullable")]
    pub grants_certifying_response: String,
    #[serde(deserialize_with = "de::nullable")]
    pub certifier_first_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub certifier_last_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub certifier_middle_initial: String,
}

/// URLs of the rendered certification documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfLinks {
    #[serde(rename = "farPDF", deserialize_with = "de::nullable")]
    pub far_pdf: String,
    #[serde(rename = "farAndDfarsPDF", deserialize_with = "de::nullable")]
    pub far_and_dfars_pdf: String,
    #[serde(rename = "architectEngineeringPDF", deserialize_with = "de::nullable")]
    pub architect_engineering_pdf: String,
    #[serde(
        rename = "financialAssistanceCertificationsPDF",
        deserialize_with = "de::nullable"
    )]
    pub financial_assistance_certifications_pdf: String,
}

// -- Provision responses ------------------------------------------------------

/// An entity's response to one FAR provision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FarResponse {
    #[serde(deserialize_with = "de::nullable")]
    pub provision_id: String,
    #[serde(deserialize_with = "de::objects")]
    pub list_of_answers: Vec<Answer>,
}

/// An entity's response to one DFARS provision. Same shape as [`FarResponse`].
pub type DfarsResponse = FarResponse;

/// An item-level answer within a provision response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Answer {
    #[serde(deserialize_with = "de::nullable")]
    pub section: String,
    #[serde(deserialize_with = "de::nullable")]
    pub question_text: String,
    #[serde(deserialize_with = "de::nullable")]
    pub answer_id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub answer_text: String,
    #[serde(deserialize_with = "de::nullable")]
    pub country: String,
    #[serde(deserialize_with = "de::object")]
    pub company: Company,
    #[serde(deserialize_with = "de::object")]
    pub highest_level_owner_cage: OwnerCage,
    #[serde(deserialize_with = "de::object")]
    pub immediate_owner_cage: OwnerCage,
    #[serde(deserialize_with = "de::object")]
    pub person_details: PersonDetails,
    #[serde(deserialize_with = "de::object")]
    pub point_of_contact: AnswerContact,
    #[serde(deserialize_with = "de::objects")]
    pub architect_experiences_list: Vec<ArchitectExperience>,
    #[serde(deserialize_with = "de::objects")]
    pub discipline_info_list: Vec<DisciplineInfo>,
}

// -- Answer detail records ----------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "de::nullable")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub tin: String,
    #[serde(deserialize_with = "de::nullable")]
    pub duns: String,
    #[serde(deserialize_with = "de::nullable")]
    pub year_established: String,
}

/// One link in the ownership chain: highest-level or immediate owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnerCage {
    #[serde(deserialize_with = "de::nullable")]
    pub cage_code: String,
    /// NATO CAGE code, for owners registered outside the US.
    #[serde(deserialize_with = "de::nullable")]
    pub n_cage_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub legal_business_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub has_owner: String,
    #[serde(deserialize_with = "de::nullable")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonDetails {
    #[serde(deserialize_with = "de::nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub middle_initial: String,
    #[serde(deserialize_with = "de::nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub title: String,
}

/// Contact named in an answer. Unlike [`crate::PointOfContact`] this carries
/// phone details and no address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnswerContact {
    #[serde(deserialize_with = "de::nullable")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub middle_initial: String,
    #[serde(deserialize_with = "de::nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub title: String,
    #[serde(deserialize_with = "de::nullable")]
    pub telephone_number: String,
    #[serde(deserialize_with = "de::nullable")]
    pub extension: String,
    #[serde(deserialize_with = "de::nullable")]
    pub international_number: String,
}

/// Architect-engineer experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArchitectExperience {
    #[serde(deserialize_with = "de::nullable")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub experience_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub experience_description: String,
    #[serde(deserialize_with = "de::nullable")]
    pub annual_avg_revenue_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub annual_avg_revenue_description: String,
}

/// Discipline and firm-size entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisciplineInfo {
    #[serde(deserialize_with = "de::nullable")]
    pub id: String,
    #[serde(rename = "disciplineID", deserialize_with = "de::nullable")]
    pub discipline_id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub firm_num_of_employees: String,
    #[serde(deserialize_with = "de::nullable")]
    pub branch_num_of_employees: String,
    #[serde(deserialize_with = "de::nullable")]
    pub discipline_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfars_key_keeps_upstream_spelling() {
        let json = serde_json::json!({
            "fARResponses": [{ "provisionId": "FAR 52.209-2", "listOfAnswers": [] }],
            "dFARResponses": [{ "provisionId": "DFARS 252.209-7002", "listOfAnswers": [] }]
        });
        let certs: Certifications = serde_json::from_value(json).unwrap();
        assert_eq!(certs.far_responses.len(), 1);
        assert_eq!(certs.dfars_responses.len(), 1);
        assert!(certs.dfars_response("DFARS 252.209-7002").is_some());
        assert!(certs.far_response("FAR 52.209-2").is_some());
        assert!(certs.far_response("FAR 52.204-26").is_none());

        // The "corrected" spelling is not what the API sends and is ignored.
        let json = serde_json::json!({
            "DFARResponses": [{ "provisionId": "DFARS 252.209-7002" }]
        });
        let certs: Certifications = serde_json::from_value(json).unwrap();
        assert!(certs.dfars_responses.is_empty());
    }

    #[test]
    fn answer_sub_records_parse() {
        let json = serde_json::json!({
            "section": "52.204-17.b",
            "questionText": "Immediate owner",
            "answerId": "2",
            "answerText": "Yes",
            "country": null,
            "company": null,
            "highestLevelOwnerCage": {
                "cageCode": "1ABC2",
                "nCageCode": null,
                "legalBusinessName": "Parent Holdings Inc",
                "hasOwner": "N",
                "id": "17"
            },
            "immediateOwnerCage": {
                "cageCode": "3DEF4",
                "legalBusinessName": "Direct Owner LLC",
                "hasOwner": "Y"
            },
            "pointOfContact": {
                "firstName": "Sam",
                "telephoneNumber": "5555550100",
                "extension": null
            },
            "architectExperiencesList": [
                { "experienceCode": "A06", "annualAvgRevenueCode": "3" }
            ],
            "disciplineInfoList": [
                { "disciplineID": "02", "firmNumOfEmployees": "12", "branchNumOfEmployees": "4" }
            ],
            "endProductsList": [{ "endProductName": "ignored" }],
            "softwareList": null
        });
        let answer: Answer = serde_json::from_value(json).unwrap();
        assert_eq!(answer.company, Company::default());
        assert_eq!(answer.highest_level_owner_cage.cage_code, "1ABC2");
        assert_eq!(answer.highest_level_owner_cage.n_cage_code, "");
        assert_eq!(answer.immediate_owner_cage.has_owner, "Y");
        assert_eq!(answer.point_of_contact.telephone_number, "5555550100");
        assert_eq!(answer.architect_experiences_list[0].experience_code, "A06");
        assert_eq!(answer.discipline_info_list[0].discipline_id, "02");
        assert_eq!(answer.discipline_info_list[0].firm_num_of_employees, "12");
    }

    #[test]
    fn pdf_link_keys() {
        let json = serde_json::json!({
            "farPDF": "/far.pdf",
            "farAndDfarsPDF": "/far-dfars.pdf",
            "architectEngineeringPDF": null,
            "financialAssistanceCertificationsPDF": "/fa.pdf"
        });
        let links: PdfLinks = serde_json::from_value(json).unwrap();
        assert_eq!(links.far_pdf, "/far.pdf");
        assert_eq!(links.far_and_dfars_pdf, "/far-dfars.pdf");
        assert_eq!(links.architect_engineering_pdf, "");
        assert_eq!(links.financial_assistance_certifications_pdf, "/fa.pdf");
    }

    #[test]
    fn qualifications_accepts_any_object() {
        let json = serde_json::json!({
            "qualifications": { "architectEngineerResponses": { "provisionId": "SF 330" } }
        });
        let rc: RepsAndCerts = serde_json::from_value(json).unwrap();
        assert_eq!(rc.qualifications, Qualifications::default());
        let out = serde_json::to_value(&rc).unwrap();
        assert_eq!(out["qualifications"], serde_json::json!({}));
    }
}
