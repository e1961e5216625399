use serde_json::{json, Value};

/// A profile document satisfying the bundled schema.
pub fn conformant_profile(common_name: &str, domain: &str) -> Value {
    json!({
        "schemaVersion": "1.0",
        "businessIdentifier": {
            "legalName": format!("{common_name} Holdings Ltd"),
            "commonName": common_name,
            "primaryDomain": domain
        },
        "description": {
            "elevator": format!("{common_name} makes things.")
        },
        "verification": {
            "status": "verified",
            "tier": "verified",
            "method": "domain-dns",
            "lastVerified": "2024-04-01",
            "qualityScore": 90
        },
        "metadata": {
            "dateAdded": "2024-01-15",
            "lastUpdated": "2024-04-01",
            "submittedBy": "Registry Team"
        },
        "sources": [{
            "type": "official-website",
            "url": format!("https://{domain}"),
            "accessed": "2024-04-01",
            "description": "Company website"
        }]
    })
}

/// A submission carrying every optional field the synthesizer understands.
pub fn full_submission() -> Value {
    json!({
        "legalName": "Northwind Traders Inc.",
        "commonName": "Northwind",
        "primaryDomain": "northwind.example",
        "aliases": ["NW Traders", "Northwind Trading"],
        "identifiers": { "duns": "123456789" },
        "elevator": "Specialty food importer.",
        "detailed": "Imports and distributes specialty foods across the region.",
        "yearFounded": "1996",
        "founding": "Started as a single warehouse.",
        "headquarters": "Seattle, WA",
        "email": "hello@northwind.example",
        "phone": "+1 206 555 0100",
        "offerings": ["Wholesale", "Catering"],
        "submittedBy": "Jordan"
    })
}
