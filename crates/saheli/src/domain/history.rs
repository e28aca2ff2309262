/// Direction of money for a history entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HistoryKind {
    Sale,
    Expense,
}

impl HistoryKind {
    /// Returns the sign prefixed to the amount.
    pub fn sign(self) -> char {
        match self {
            HistoryKind::Sale => '+',
            HistoryKind::Expense => '-',
        }
    }
}

/// One recorded sale or expense.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryItem {
    pub amount: String,
    pub date: String,
    pub description: String,
    pub id: String,
    pub kind: HistoryKind,
}

impl HistoryItem {
    /// Returns the signed amount label, e.g. `+₹100`.
    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.kind.sign(), self.amount)
    }
}

/// Returns the fixed sample entries shown on the history page.
pub fn sample_history() -> Vec<HistoryItem> {
    vec![
        HistoryItem {
            amount: "₹100".to_string(),
            date: "Today, 2:30 PM".to_string(),
            description: "5 samosas sold".to_string(),
            id: "1".to_string(),
            kind: HistoryKind::Sale,
        },
        HistoryItem {
            amount: "₹250".to_string(),
            date: "Today, 10:00 AM".to_string(),
            description: "Flour and oil".to_string(),
            id: "2".to_string(),
            kind: HistoryKind::Expense,
        },
        HistoryItem {
            amount: "₹450".to_string(),
            date: "Yesterday, 5:00 PM".to_string(),
            description: "3 pickle jars sold".to_string(),
            id: "3".to_string(),
            kind: HistoryKind::Sale,
        },
    ]
}
