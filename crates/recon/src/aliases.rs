//! Historical/variant name knowledge base.
//!
//! Two many-to-one tables: state variants to current canonical state names,
//! district variants to current canonical district names. The table is
//! immutable once built and injected into the match engine — tests use
//! small synthetic tables, production runs start from `builtin()` and may
//! layer extra entries from the run config.
//!
//! Keys and values are stored in canonicalized form. A district alias is a
//! hint, not a promise: the match engine only accepts it when the target
//! actually exists in the resolved state's candidate set.

use std::collections::HashMap;

use crate::normalize::normalize;

/// Known state renames and variant spellings, in canonical form.
const STATE_RENAMES: &[(&str, &str)] = &[
    ("ORISSA", "ODISHA"),
    ("PONDICHERRY", "PUDUCHERRY"),
    ("UTTARANCHAL", "UTTARAKHAND"),
    ("NCT OF DELHI", "DELHI"),
    ("NATIONAL CAPITAL TERRITORY OF DELHI", "DELHI"),
    ("JAMMU & KASHMIR", "JAMMU AND KASHMIR"),
    ("J&K", "JAMMU AND KASHMIR"),
    ("J & K", "JAMMU AND KASHMIR"),
    ("A&N ISLANDS", "ANDAMAN AND NICOBAR ISLANDS"),
    ("ANDAMAN & NICOBAR ISLANDS", "ANDAMAN AND NICOBAR ISLANDS"),
    ("ANDAMAN & NICOBAR", "ANDAMAN AND NICOBAR ISLANDS"),
    (
        "DADRA & NAGAR HAVELI",
        "DADRA AND NAGAR HAVELI AND DAMAN AND DIU",
    ),
    (
        "DADRA AND NAGAR HAVELI",
        "DADRA AND NAGAR HAVELI AND DAMAN AND DIU",
    ),
    ("DAMAN & DIU", "DADRA AND NAGAR HAVELI AND DAMAN AND DIU"),
    ("DAMAN AND DIU", "DADRA AND NAGAR HAVELI AND DAMAN AND DIU"),
    ("CHATTISGARH", "CHHATTISGARH"),
    ("CHHATISGARH", "CHHATTISGARH"),
    ("TELENGANA", "TELANGANA"),
    ("TAMILNADU", "TAMIL NADU"),
    ("WESTBENGAL", "WEST BENGAL"),
    ("ANDHRAPRADESH", "ANDHRA PRADESH"),
    ("ARUNACHALPRADESH", "ARUNACHAL PRADESH"),
    ("HIMACHALPRADESH", "HIMACHAL PRADESH"),
    ("MADHYAPRADESH", "MADHYA PRADESH"),
    ("UTTARPRADESH", "UTTAR PRADESH"),
    ("MYSORE STATE", "KARNATAKA"),
    ("MADRAS STATE", "TAMIL NADU"),
];

/// Known district renames, mergers, and variant spellings, in canonical
/// form, grouped by the state they occur in. Every entry here is one
/// fewer fuzzy near-miss in production extracts.
const DISTRICT_RENAMES: &[(&str, &str)] = &[
    // Uttar Pradesh
    ("ALLAHABAD", "PRAYAGRAJ"),
    ("FAIZABAD", "AYODHYA"),
    ("CAWNPORE", "KANPUR NAGAR"),
    ("KANPUR", "KANPUR NAGAR"),
    ("BENARES", "VARANASI"),
    ("BANARAS", "VARANASI"),
    ("LAKHIMPUR KHERI", "KHERI"),
    ("SANT RAVIDAS NAGAR", "BHADOHI"),
    ("GAUTAM BUDH NAGAR", "GAUTAM BUDDHA NAGAR"),
    ("GAUTAMBUDDHA NAGAR", "GAUTAM BUDDHA NAGAR"),
    ("NOIDA", "GAUTAM BUDDHA NAGAR"),
    ("JYOTIBA PHULE NAGAR", "AMROHA"),
    ("PANCHSHEEL NAGAR", "HAPUR"),
    ("BHIM NAGAR", "SAMBHAL"),
    ("PRABUDH NAGAR", "SHAMLI"),
    ("KASHIRAM NAGAR", "KASGANJ"),
    ("KANSHIRAM NAGAR", "KASGANJ"),
    ("MAHAMAYA NAGAR", "HATHRAS"),
    ("CHHATRAPATI SHAHUJI MAHARAJ NAGAR", "AMETHI"),
    ("BARA BANKI", "BARABANKI"),
    ("BULANDSHAHAR", "BULANDSHAHR"),
    ("RAE BARELI", "RAEBARELI"),
    // Haryana
    ("GURGAON", "GURUGRAM"),
    ("GURGOAN", "GURUGRAM"),
    ("MEWAT", "NUH"),
    // Madhya Pradesh
    ("HOSHANGABAD", "NARMADAPURAM"),
    ("EAST NIMAR", "KHANDWA"),
    ("WEST NIMAR", "KHARGONE"),
    // Maharashtra
    ("AURANGABAD", "CHHATRAPATI SAMBHAJINAGAR"),
    ("OSMANABAD", "DHARASHIV"),
    ("BOMBAY", "MUMBAI"),
    ("GREATER BOMBAY", "MUMBAI"),
    ("MUMBAI (SUBURBAN)", "MUMBAI SUBURBAN"),
    ("POONA", "PUNE"),
    ("AHMADNAGAR", "AHMEDNAGAR"),
    // Karnataka
    ("BANGALORE", "BENGALURU URBAN"),
    ("BANGALORE URBAN", "BENGALURU URBAN"),
    ("BANGALORE RURAL", "BENGALURU RURAL"),
    ("BELGAUM", "BELAGAVI"),
    ("GULBARGA", "KALABURAGI"),
    ("BIJAPUR", "VIJAYAPURA"),
    ("BELLARY", "BALLARI"),
    ("TUMKUR", "TUMAKURU"),
    ("SHIMOGA", "SHIVAMOGGA"),
    ("MYSORE", "MYSURU"),
    ("CHIKMAGALUR", "CHIKKAMAGALURU"),
    ("CHIKMANGALUR", "CHIKKAMAGALURU"),
    // Andhra Pradesh / Telangana
    ("CUDDAPAH", "KADAPA"),
    ("VIZAG", "VISAKHAPATNAM"),
    ("VIZAGAPATAM", "VISAKHAPATNAM"),
    ("MAHABUBNAGAR", "MAHBUBNAGAR"),
    // Tamil Nadu
    ("MADRAS", "CHENNAI"),
    ("TANJORE", "THANJAVUR"),
    ("TRICHY", "TIRUCHIRAPPALLI"),
    ("TIRUCHI", "TIRUCHIRAPPALLI"),
    ("TIRUCHIRAPALLI", "TIRUCHIRAPPALLI"),
    ("TUTICORIN", "THOOTHUKKUDI"),
    ("THOOTHUKUDI", "THOOTHUKKUDI"),
    ("NORTH ARCOT", "VELLORE"),
    ("SOUTH ARCOT", "CUDDALORE"),
    ("CHINGLEPUT", "CHENGALPATTU"),
    ("KANYAKUMARI", "KANNIYAKUMARI"),
    // Kerala
    ("TRIVANDRUM", "THIRUVANANTHAPURAM"),
    ("COCHIN", "ERNAKULAM"),
    ("CALICUT", "KOZHIKODE"),
    ("QUILON", "KOLLAM"),
    ("ALLEPPEY", "ALAPPUZHA"),
    ("PALGHAT", "PALAKKAD"),
    ("TRICHUR", "THRISSUR"),
    ("CANNANORE", "KANNUR"),
    // West Bengal
    ("CALCUTTA", "KOLKATA"),
    ("BURDWAN", "PURBA BARDHAMAN"),
    ("BARDDHAMAN", "PURBA BARDHAMAN"),
    ("WEST MIDNAPORE", "PASCHIM MEDINIPUR"),
    ("EAST MIDNAPORE", "PURBA MEDINIPUR"),
    ("24 PARGANAS NORTH", "NORTH 24 PARGANAS"),
    ("24 PARGANAS SOUTH", "SOUTH 24 PARGANAS"),
    ("NORTH 24-PARGANAS", "NORTH 24 PARGANAS"),
    ("SOUTH 24-PARGANAS", "SOUTH 24 PARGANAS"),
    ("DARJILING", "DARJEELING"),
    ("COOCHBEHAR", "COOCH BEHAR"),
    ("KOCH BIHAR", "COOCH BEHAR"),
    ("HOOGLY", "HOOGHLY"),
    ("HAORA", "HOWRAH"),
    ("PURULIYA", "PURULIA"),
    ("MALDAH", "MALDA"),
    // Gujarat
    ("AHMADABAD", "AHMEDABAD"),
    ("BARODA", "VADODARA"),
    ("BROACH", "BHARUCH"),
    ("MEHSANA", "MAHESANA"),
    ("PANCHMAHAL", "PANCH MAHALS"),
    ("BANASKANTHA", "BANAS KANTHA"),
    ("SABARKANTHA", "SABAR KANTHA"),
    ("SURENDRA NAGAR", "SURENDRANAGAR"),
    ("DANGS", "DANG"),
    ("THE DANGS", "DANG"),
    // Rajasthan
    ("JHUNJHUNUN", "JHUNJHUNU"),
    ("GANGANAGAR", "SRI GANGANAGAR"),
    ("SRIGANGANAGAR", "SRI GANGANAGAR"),
    ("CHITTAURGARH", "CHITTORGARH"),
    ("DHAULPUR", "DHOLPUR"),
    // Bihar
    ("PURNEA", "PURNIA"),
    ("MONGHYR", "MUNGER"),
    ("SHAHABAD", "BHOJPUR"),
    // Odisha
    ("ANUGUL", "ANGUL"),
    ("BAUDH", "BOUDH"),
    ("JAJAPUR", "JAJPUR"),
    ("KENDUJHAR", "KEONJHAR"),
    ("SONEPUR", "SUBARNAPUR"),
    ("BALESHWAR", "BALASORE"),
    // Punjab
    ("NAWANSHAHR", "SHAHID BHAGAT SINGH NAGAR"),
    ("ROPAR", "RUPNAGAR"),
    ("MOHALI", "SAS NAGAR"),
    ("MUKTSAR", "SRI MUKTSAR SAHIB"),
    ("FEROZPUR", "FIROZPUR"),
    ("FEROZEPUR", "FIROZPUR"),
    // Assam
    ("GAUHATI", "KAMRUP METROPOLITAN"),
    ("NOWGONG", "NAGAON"),
    ("SIBSAGAR", "SIVASAGAR"),
    ("NORTH LAKHIMPUR", "LAKHIMPUR"),
    // Chhattisgarh
    ("KAWARDHA", "KABIRDHAM"),
    ("JANJGIR CHAMPA", "JANJGIR-CHAMPA"),
    // Jammu and Kashmir
    ("BARAMULA", "BARAMULLA"),
    ("BADGAM", "BUDGAM"),
    ("BANDIPORE", "BANDIPORA"),
    ("SHUPIYAN", "SHOPIAN"),
    ("LEH (LADAKH)", "LEH"),
    // Uttarakhand
    ("GARHWAL", "PAURI GARHWAL"),
    ("HARDWAR", "HARIDWAR"),
    ("DEHRA DUN", "DEHRADUN"),
    ("UDHAMSINGH NAGAR", "UDHAM SINGH NAGAR"),
    // Himachal Pradesh
    ("LAHUL & SPITI", "LAHAUL AND SPITI"),
    ("LAHUL AND SPITI", "LAHAUL AND SPITI"),
];

/// Immutable rename/variant lookup tables, injected into the match engine.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    states: HashMap<String, String>,
    districts: HashMap<String, String>,
}

impl AliasTable {
    /// An empty table. Useful as a test double and as the base for
    /// config-only alias sets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in knowledge base of Indian state and district renames.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.extend_states(STATE_RENAMES.iter().map(|&(k, v)| (k, v)));
        table.extend_districts(DISTRICT_RENAMES.iter().map(|&(k, v)| (k, v)));
        table
    }

    /// Add state aliases. Inputs are normalized; later entries win.
    pub fn extend_states<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        for (from, to) in entries {
            let from = normalize(from.as_ref());
            let to = normalize(to.as_ref());
            if !from.is_empty() && !to.is_empty() && from != to {
                self.states.insert(from, to);
            }
        }
    }

    /// Add district aliases. Inputs are normalized; later entries win.
    pub fn extend_districts<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        for (from, to) in entries {
            let from = normalize(from.as_ref());
            let to = normalize(to.as_ref());
            if !from.is_empty() && !to.is_empty() && from != to {
                self.districts.insert(from, to);
            }
        }
    }

    /// Remap a normalized state name to its current canonical name, or
    /// return it unchanged when no alias applies.
    pub fn remap_state<'a>(&'a self, state_norm: &'a str) -> &'a str {
        self.states.get(state_norm).map_or(state_norm, String::as_str)
    }

    /// Current canonical target for a normalized district name, if any.
    pub fn district_target(&self, district_norm: &str) -> Option<&str> {
        self.districts.get(district_norm).map(String::as_str)
    }

    pub fn state_alias_count(&self) -> usize {
        self.states.len()
    }

    pub fn district_alias_count(&self) -> usize {
        self.districts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_known_renames() {
        let t = AliasTable::builtin();
        assert_eq!(t.remap_state("ORISSA"), "ODISHA");
        assert_eq!(t.remap_state("PONDICHERRY"), "PUDUCHERRY");
        assert_eq!(t.district_target("ALLAHABAD"), Some("PRAYAGRAJ"));
        assert_eq!(t.district_target("GURGAON"), Some("GURUGRAM"));
        assert_eq!(t.district_target("CALCUTTA"), Some("KOLKATA"));
    }

    #[test]
    fn unknown_names_pass_through() {
        let t = AliasTable::builtin();
        assert_eq!(t.remap_state("GUJARAT"), "GUJARAT");
        assert_eq!(t.district_target("PUNE"), None);
    }

    #[test]
    fn extend_normalizes_and_overrides() {
        let mut t = AliasTable::empty();
        t.extend_districts(vec![("  old town ", "New Town")]);
        assert_eq!(t.district_target("OLD TOWN"), Some("NEW TOWN"));

        t.extend_districts(vec![("old town", "Newer Town")]);
        assert_eq!(t.district_target("OLD TOWN"), Some("NEWER TOWN"));
    }

    #[test]
    fn self_mappings_are_dropped() {
        let mut t = AliasTable::empty();
        t.extend_states(vec![("Gujarat", "GUJARAT")]);
        assert_eq!(t.state_alias_count(), 0);
    }

    #[test]
    fn many_to_one_targets() {
        let t = AliasTable::builtin();
        // Multiple historical spellings converge on one canonical name.
        assert_eq!(t.district_target("TRICHY"), Some("TIRUCHIRAPPALLI"));
        assert_eq!(t.district_target("TIRUCHI"), Some("TIRUCHIRAPPALLI"));
        assert_eq!(t.district_target("TIRUCHIRAPALLI"), Some("TIRUCHIRAPPALLI"));
    }
}
