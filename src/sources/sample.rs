/// Canned dataset served when the backend is unavailable or Offline is selected
use crate::domain::{Dataset, Issue};
use crate::services::aggregator::aggregate;

const SAMPLE: [(i64, &str, &str, f64, f64, &str, &str); 8] = [
    (
        1001,
        "FIRE in Chawkbazar area! Need immediate help! 🔥🔥",
        "fire emergency",
        98.5,
        95.0,
        "Chawkbazar, Dhaka",
        "2025-11-04T16:30:00",
    ),
    (
        1002,
        "Flood water entering homes in Demra. Emergency situation!",
        "flood",
        96.2,
        90.0,
        "Demra, Dhaka",
        "2025-11-04T15:00:00",
    ),
    (
        1003,
        "বিদ্যুৎ নেই গত ৬ ঘন্টা। এই গরমে অসহ্য। Load shedding unbearable",
        "electricity outage",
        94.8,
        75.0,
        "Uttara, Dhaka",
        "2025-11-04T14:20:00",
    ),
    (
        1004,
        "আমাদের এলাকায় ৩ দিন ধরে পানি নেই। Water crisis in Mirpur",
        "water supply",
        93.1,
        70.0,
        "Mirpur, Dhaka",
        "2025-11-04T10:30:00",
    ),
    (
        1005,
        "Road accident near Science Lab. Need ambulance immediately!",
        "medical emergency",
        97.3,
        85.0,
        "Science Lab, Dhaka",
        "2025-11-04T13:20:00",
    ),
    (
        1006,
        "Broken road near Dhanmondi 27. Accident happened yesterday.",
        "road damage",
        91.7,
        65.0,
        "Dhanmondi, Dhaka",
        "2025-11-04T11:15:00",
    ),
    (
        1007,
        "Garbage not collected for 2 weeks. Smell is terrible!",
        "garbage collection",
        89.4,
        60.0,
        "Gulshan, Dhaka",
        "2025-11-04T09:00:00",
    ),
    (
        1008,
        "Gas pressure very low. Can't cook food. Help needed urgently",
        "gas supply",
        88.2,
        55.0,
        "Banani, Dhaka",
        "2025-11-04T12:45:00",
    ),
];

/// Build the offline dataset. Pure and deterministic.
pub fn offline_dataset() -> Dataset {
    let issues: Vec<Issue> = SAMPLE
        .iter()
        .map(
            |&(id, text, category, confidence, severity, location, timestamp)| Issue {
                id,
                original_text: text.to_string(),
                category: category.to_string(),
                confidence,
                severity,
                location: location.to_string(),
                timestamp: timestamp.to_string(),
                status: "pending".to_string(),
            },
        )
        .collect();
    let stats = aggregate(&issues);
    Dataset { issues, stats }
}
