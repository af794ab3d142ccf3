/// One multiple-choice question. The explanation is shown as feedback
/// after the answer is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub category: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

/// The fixed question bank, in presentation order.
pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "Imagine you're walking down the street and feel the air is 'heavy' and hard to breathe. What invisible pollutant is most likely causing this sensation?",
        category: "Personal Experience",
        options: [
            "Carbon Dioxide (CO₂) - the gas we exhale",
            "Particulate Matter (PM2.5) - microscopic particles that enter the lungs",
            "Oxygen (O₂) - the gas we breathe",
            "Nitrogen (N₂) - the most abundant gas in the air",
        ],
        correct: 1,
        explanation: "PM2.5 are particles so small they penetrate deep into the lungs, causing that 'heavy air' feeling and difficulty breathing. It's like breathing invisible dust!",
    },
    Question {
        prompt: "You're planning an outdoor activity for your family. What air quality value would you consider safe for children to play in the park?",
        category: "Family Protection",
        options: [
            "0-50 (Green) - Clean and safe air for everyone",
            "51-100 (Yellow) - Acceptable, but sensitive people should be careful",
            "101-150 (Orange) - Unhealthy for sensitive groups",
            "151-200 (Red) - Unhealthy for everyone",
        ],
        correct: 0,
        explanation: "Values 0-50 (Green) are the only ones considered safe for outdoor activities, especially for children, elderly, and people with respiratory problems. It's when you can breathe deeply without worry!",
    },
    Question {
        prompt: "Your 75-year-old grandmother is worried about air quality in her city. What is the most common impact of air pollution on elderly health?",
        category: "Elderly Impact",
        options: [
            "Improved lung capacity",
            "Increased risk of heart attacks and strokes",
            "Strengthened immune system",
            "Reduced blood pressure",
        ],
        correct: 1,
        explanation: "Air pollution significantly increases the risk of cardiovascular problems in the elderly, including heart attacks and strokes. That's why polluted air days are especially dangerous for our grandparents.",
    },
    Question {
        prompt: "You're driving to work every day and worry about your contribution to pollution. What daily action would have the greatest positive impact on air quality?",
        category: "Personal Action",
        options: [
            "Use car air conditioning less",
            "Choose public transportation or bicycle 2-3 times a week",
            "Change car air filter monthly",
            "Drive slower to save fuel",
        ],
        correct: 1,
        explanation: "Reducing individual car use is the most impactful action. Every trip you take by bus, subway, or bicycle means fewer pollutants in the air we all breathe!",
    },
    Question {
        prompt: "Reflecting on what you learned, how many people in the world breathe air that doesn't meet WHO safe standards?",
        category: "Global Awareness",
        options: [
            "1 in 10 people (10%)",
            "1 in 4 people (25%)",
            "9 in 10 people (90%)",
            "All people (100%)",
        ],
        correct: 2,
        explanation: "Incredibly, 9 in 10 people in the world breathe air that doesn't meet WHO safe standards. This means almost all of us, including you and your family, are exposed to dangerous levels of air pollution.",
    },
];
