//! Static knowledge corpus — versioned, read-only, compiled in.
//!
//! Topics use camelCase keys; the ranker splits them to words so a query
//! like "short cycling" finds `shortCycling`. Corpus order is meaningful:
//! the ranker's sort is stable, so ties keep this ordering.

/// Corpus version tag carried on every snippet.
pub const CORPUS_SOURCE: &str = "joule-corpus-v1";

/// One corpus entry.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub section: &'static str,
    pub topic: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub key_concepts: &'static [&'static str],
}

/// The full corpus, grouped by section.
pub static ENTRIES: &[CorpusEntry] = &[
    // ===== heatPumpFundamentals =====
    CorpusEntry {
        section: "heatPumpFundamentals",
        topic: "refrigerationCycle",
        title: "How a heat pump moves heat",
        summary: "A heat pump moves heat rather than generating it: refrigerant \
                  absorbs heat outdoors (even in cold air), a compressor raises \
                  its temperature, and indoor coils release it. Reversing the \
                  cycle provides cooling.",
        key_concepts: &["refrigerant", "compressor", "coil", "reversing valve", "heat transfer"],
    },
    CorpusEntry {
        section: "heatPumpFundamentals",
        topic: "balancePoint",
        title: "The balance point",
        summary: "The balance point is the outdoor temperature at which a heat \
                  pump's output exactly matches the home's heat loss. Below it, \
                  auxiliary heat must make up the difference. Typical balance \
                  points fall between 25 and 35 F.",
        key_concepts: &["balance point", "heat loss", "auxiliary heat", "outdoor temperature"],
    },
    CorpusEntry {
        section: "heatPumpFundamentals",
        topic: "auxiliaryHeat",
        title: "Auxiliary and emergency heat",
        summary: "Auxiliary heat (usually electric resistance strips) supplements \
                  the heat pump below the balance point. Emergency heat runs the \
                  strips alone. Resistance heat costs 2-3x more per delivered BTU \
                  than the compressor.",
        key_concepts: &["aux heat", "emergency heat", "resistance strips", "cost"],
    },
    CorpusEntry {
        section: "heatPumpFundamentals",
        topic: "defrostCycle",
        title: "The defrost cycle",
        summary: "In cold, humid weather the outdoor coil frosts over. The unit \
                  periodically reverses into cooling mode to melt it, which is \
                  why steam rises off the unit and vents briefly blow cool air. \
                  This is normal operation, not a fault.",
        key_concepts: &["defrost", "frost", "outdoor coil", "steam", "reversing"],
    },
    CorpusEntry {
        section: "heatPumpFundamentals",
        topic: "coldWeatherPerformance",
        title: "Performance in cold weather",
        summary: "Heat pump capacity and efficiency fall as outdoor temperature \
                  drops. Modern cold-climate units hold useful output well below \
                  0 F, but runtime lengthens; long steady runs in cold snaps are \
                  expected, not a defect.",
        key_concepts: &["capacity", "cop", "cold climate", "runtime"],
    },
    // ===== troubleshooting =====
    CorpusEntry {
        section: "troubleshooting",
        topic: "shortCycling",
        title: "Short cycling",
        summary: "Short cycling is when the system starts and stops in runs of \
                  only a few minutes. Common causes: oversized equipment, a \
                  clogged filter, low refrigerant charge, or an aggressive \
                  thermostat differential. It wears the compressor and hurts \
                  efficiency.",
        key_concepts: &["short cycling", "oversized", "filter", "differential", "compressor wear"],
    },
    CorpusEntry {
        section: "troubleshooting",
        topic: "auxHeatRunaway",
        title: "Auxiliary heat running too often",
        summary: "Aux heat that engages above the balance point usually points to \
                  a setback recovery that is too steep, a low aux lockout \
                  setting, or a failing compressor. Check the lockout threshold \
                  before assuming a hardware fault.",
        key_concepts: &["aux heat", "lockout", "setback recovery", "threshold"],
    },
    CorpusEntry {
        section: "troubleshooting",
        topic: "filterMaintenance",
        title: "Filter maintenance",
        summary: "A clogged filter starves airflow: longer runs, frozen coils, \
                  burning-dust smells at season start, and short cycling on \
                  limit switches. Check monthly; replace every 1-3 months \
                  depending on filter depth and household dust.",
        key_concepts: &["filter", "airflow", "burning smell", "frozen coil"],
    },
    CorpusEntry {
        section: "troubleshooting",
        topic: "refrigerantCharge",
        title: "Low refrigerant charge",
        summary: "Refrigerant is not consumed; low charge means a leak. Symptoms: \
                  weak heating or cooling, ice on the lines or coil, hissing at \
                  the air handler. Charge diagnosis and repair require a \
                  licensed technician.",
        key_concepts: &["refrigerant", "leak", "ice", "technician"],
    },
    // ===== comfort =====
    CorpusEntry {
        section: "comfort",
        topic: "humidityControl",
        title: "Humidity and comfort",
        summary: "Indoor comfort tracks humidity as much as temperature. 30-50% \
                  relative humidity suits most homes: higher feels clammy and \
                  feeds mold, lower causes static and dry skin. Cooling \
                  dehumidifies as a side effect; dedicated control needs longer, \
                  slower runs.",
        key_concepts: &["humidity", "clammy", "static", "dehumidify", "comfort band"],
    },
    CorpusEntry {
        section: "comfort",
        topic: "thermostatScheduling",
        title: "Scheduling and setbacks",
        summary: "Mild setbacks (2-4 F) save energy on furnaces, but deep \
                  setbacks can cost heat pump owners more by triggering aux heat \
                  on recovery. Schedule gentle ramps and let the thermostat \
                  start recovery early.",
        key_concepts: &["schedule", "setback", "recovery", "aux heat"],
    },
    CorpusEntry {
        section: "comfort",
        topic: "zoningAirflow",
        title: "Uneven rooms and airflow",
        summary: "Hot and cold rooms usually trace to duct balance, closed \
                  registers, or solar load, not the equipment. Opening all \
                  registers and running the fan in circulate mode evens out \
                  stratification cheaply.",
        key_concepts: &["airflow", "ducts", "registers", "circulate", "uneven"],
    },
    // ===== efficiency =====
    CorpusEntry {
        section: "efficiency",
        topic: "energySavings",
        title: "Where the savings are",
        summary: "The biggest residential wins, in order: air sealing and \
                  insulation, setpoint discipline, filter hygiene, and duct \
                  sealing. A one-degree setpoint change moves heating energy \
                  roughly 3%.",
        key_concepts: &["insulation", "air sealing", "setpoint", "ducts", "savings"],
    },
    CorpusEntry {
        section: "efficiency",
        topic: "seerRatings",
        title: "SEER, HSPF, and COP",
        summary: "SEER rates seasonal cooling efficiency, HSPF seasonal heating, \
                  and COP instantaneous heat delivered per watt. A COP of 3 \
                  means three units of heat per unit of electricity; resistance \
                  heat is always COP 1.",
        key_concepts: &["seer", "hspf", "cop", "efficiency rating"],
    },
    CorpusEntry {
        section: "efficiency",
        topic: "heatPumpSizing",
        title: "Sizing a heat pump",
        summary: "Sizing follows the home's heat loss, not square footage rules \
                  of thumb alone. One ton is 12,000 BTU/hr; a tight 2,000 sq ft \
                  home may need 2-3 tons. Oversizing causes short cycling and \
                  poor dehumidification.",
        key_concepts: &["sizing", "tons", "btu", "heat loss", "oversized"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_nonempty_and_titled() {
        assert!(ENTRIES.len() >= 12);
        for e in ENTRIES {
            assert!(!e.title.is_empty(), "untitled entry {}", e.topic);
            assert!(!e.key_concepts.is_empty(), "no concepts on {}", e.topic);
        }
    }

    #[test]
    fn topics_are_unique() {
        let mut topics: Vec<_> = ENTRIES.iter().map(|e| e.topic).collect();
        topics.sort_unstable();
        topics.dedup();
        assert_eq!(topics.len(), ENTRIES.len());
    }
}
