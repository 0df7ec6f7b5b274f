//! Subject name attribute extraction

use const_oid::ObjectIdentifier;
use der::asn1::{Ia5StringRef, PrintableStringRef, Utf8StringRef};
use der::Any;
use x509_cert::name::Name;

use crate::dn::DnAttributes;

const OID_CN: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
const OID_OU: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");

/// Pull CN and OU out of an X.509 name
///
/// RDNs are walked in encoded order and a later attribute overwrites an
/// earlier one, matching the header DN parser.
pub(crate) fn extract_subject_attributes(name: &Name) -> DnAttributes {
    let mut common_name = None;
    let mut organizational_unit = None;

    for rdn in &name.0 {
        for atv in rdn.0.iter() {
            let slot = if atv.oid == OID_CN {
                &mut common_name
            } else if atv.oid == OID_OU {
                &mut organizational_unit
            } else {
                continue;
            };
            if let Some(value) = directory_string(&atv.value) {
                *slot = Some(value);
            }
        }
    }

    DnAttributes::new(
        common_name.as_deref().unwrap_or_default(),
        organizational_unit.as_deref().unwrap_or_default(),
    )
}

/// Decode the string types seen in practice for DirectoryString values
fn directory_string(value: &Any) -> Option<String> {
    if let Ok(ps) = PrintableStringRef::try_from(value) {
        Some(ps.to_string())
    } else if let Ok(utf8s) = Utf8StringRef::try_from(value) {
        Some(utf8s.to_string())
    } else if let Ok(ia5s) = Ia5StringRef::try_from(value) {
        Some(ia5s.to_string())
    } else {
        None
    }
}
