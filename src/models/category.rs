use serde::Serialize;

/// Travel categories known to the emission factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Car,
    Bus,
    MetroTrain,
    Motorcycle,
    Cycle,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Car,
        Category::Bus,
        Category::MetroTrain,
        Category::Motorcycle,
        Category::Cycle,
    ];

    /// Full label, as stored in the `logs.category` column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Car => "Travel: Car",
            Category::Bus => "Travel: Bus",
            Category::MetroTrain => "Travel: Metro or Train",
            Category::Motorcycle => "Travel: Motorcycle",
            Category::Cycle => "Travel: Cycle",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Car => "car",
            Category::Bus => "bus",
            Category::MetroTrain => "train",
            Category::Motorcycle => "moto",
            Category::Cycle => "cycle",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == s)
    }

    /// Helper: accept either the full label or a short code (any case).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if let Some(c) = Category::from_db_str(code) {
            return Some(c);
        }

        match code.to_lowercase().as_str() {
            "car" | "travel: car" => Some(Category::Car),
            "bus" | "travel: bus" => Some(Category::Bus),
            "train" | "metro" | "travel: metro or train" => Some(Category::MetroTrain),
            "moto" | "motorcycle" | "travel: motorcycle" => Some(Category::Motorcycle),
            "cycle" | "bike" | "bicycle" | "travel: cycle" => Some(Category::Cycle),
            _ => None,
        }
    }
}
