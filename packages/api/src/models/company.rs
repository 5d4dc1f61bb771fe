use serde::{Deserialize, Serialize};

/// A company taking part in the fair.
///
/// Booking payloads embed a partially populated company, so every field
/// except the id tolerates being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub postalcode: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub picture: String,
}

/// Body for creating or updating a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub address: String,
    pub business: String,
    pub province: String,
    pub postalcode: String,
    pub tel: String,
    pub picture: String,
}

impl From<&Company> for NewCompany {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            address: company.address.clone(),
            business: company.business.clone(),
            province: company.province.clone(),
            postalcode: company.postalcode.clone(),
            tel: company.tel.clone(),
            picture: company.picture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_company_deserializes() {
        let company: Company =
            serde_json::from_str(r#"{"_id":"c1","name":"Acme","tel":"021234567"}"#).unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.business, "");
    }

    #[test]
    fn test_edit_form_from_company() {
        let company = Company {
            id: "c1".into(),
            name: "Acme".into(),
            address: "1 Road".into(),
            business: "Software".into(),
            province: "Bangkok".into(),
            postalcode: "10330".into(),
            tel: "021234567".into(),
            picture: "https://img.example/acme.png".into(),
        };
        let form = NewCompany::from(&company);

        assert_eq!(form.name, "Acme");
        assert_eq!(form.postalcode, "10330");
        assert!(serde_json::to_value(&form).unwrap().get("_id").is_none());
    }
}
