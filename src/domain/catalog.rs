//! Static content shown by the learning modules.
//!
//! Everything here is compile-time data. Modules borrow from these tables and
//! never mutate them.

use super::view::View;

/// Difficulty tag shown on a story lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LessonLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LessonLevel::Beginner => "Beginner",
            LessonLevel::Intermediate => "Intermediate",
            LessonLevel::Advanced => "Advanced",
        }
    }
}

/// A read-aloud story lesson.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: LessonLevel,
    pub duration: &'static str,
    pub completed: bool,
    pub content: &'static str,
    pub practice_words: &'static [&'static str],
}

/// A fill-in-the-blanks sentence attached to a speech.
#[derive(Debug, Clone)]
pub struct QuizSentence {
    /// Sentence fragments; blanks sit between consecutive fragments
    pub parts: &'static [&'static str],
    /// Expected word for each blank, in order
    pub answers: &'static [&'static str],
}

impl QuizSentence {
    /// Number of blanks in the sentence.
    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }
}

/// A famous speech retold for children.
#[derive(Debug, Clone)]
pub struct Speech {
    pub id: &'static str,
    pub title: &'static str,
    pub speaker: &'static str,
    pub description: &'static str,
    pub kid_friendly_text: &'static str,
    pub quiz_words: &'static [&'static str],
    pub quiz: QuizSentence,
}

/// A single word to pronounce with its encouragement line.
#[derive(Debug, Clone, Copy)]
pub struct PracticeWord {
    pub word: &'static str,
    pub encouragement: &'static str,
}

/// An age band with its word list.
#[derive(Debug, Clone)]
pub struct AcademicClass {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub age_group: &'static str,
    pub is_new: bool,
    pub words: &'static [PracticeWord],
}

/// A selectable card that opens another view.
#[derive(Debug, Clone, Copy)]
pub struct ModuleCard {
    pub title: &'static str,
    pub description: &'static str,
    pub target: View,
}

/// A headline/detail pair for feature grids.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A value/label pair for stat rows.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One section of the IELTS preparation module.
#[derive(Debug, Clone)]
pub struct IeltsSection {
    pub title: &'static str,
    pub summary: &'static str,
    pub tips: &'static [&'static str],
}

// ============================================================================
// My Lessons
// ============================================================================

pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: "adventure-tale",
        title: "The Great Adventure",
        description: "A magical story about friendship and courage",
        level: LessonLevel::Beginner,
        duration: "5 min",
        completed: true,
        content: "Once upon a time, in a land far away, there lived a young explorer named Alex. Alex had always dreamed of going on a great adventure to discover magical treasures hidden in the enchanted forest.\n\n\
One sunny morning, Alex packed a backpack with snacks, a map, and a compass. The journey began at the edge of the village, where the path led into the mysterious woods filled with talking animals and glowing flowers.\n\n\
As Alex walked deeper into the forest, a friendly rabbit appeared and offered to be a guide. Together, they discovered a crystal cave where beautiful gems sparkled like stars. The rabbit explained that these gems were gifts from the forest spirits for those brave enough to explore.\n\n\
Alex learned that the greatest treasure wasn't the gems, but the friendship made along the way. The adventure taught Alex that being kind to others and helping those in need brings the most joy.\n\n\
When Alex returned home, everyone in the village gathered to hear about the wonderful adventure. From that day on, Alex became known as the kindest and bravest explorer in the land.",
        practice_words: &["adventure", "explorer", "magical", "friendship", "treasure", "courage"],
    },
    Lesson {
        id: "space-journey",
        title: "Journey to the Stars",
        description: "An exciting trip through space and planets",
        level: LessonLevel::Intermediate,
        duration: "7 min",
        completed: false,
        content: "Captain Luna was the youngest astronaut ever chosen for the Mars mission. Her spacecraft, called the Stellar Wind, was equipped with the most advanced technology in the galaxy.\n\n\
As Luna launched into space, she watched Earth become smaller and smaller until it looked like a beautiful blue marble floating in the darkness. The journey through space was filled with amazing sights: colorful nebulae, spinning asteroids, and distant planets.\n\n\
On her way to Mars, Luna encountered a space station where friendly alien scientists were conducting research. They shared their knowledge about the universe and taught Luna about different star systems and galaxies.\n\n\
When Luna finally reached Mars, she planted a flag and collected samples of the red soil. She discovered evidence of ancient rivers and realized that Mars once had water flowing on its surface.\n\n\
The return journey was just as exciting. Luna brought back valuable information that helped scientists on Earth learn more about space exploration and the possibility of life on other planets.",
        practice_words: &["astronaut", "spacecraft", "galaxy", "nebulae", "exploration", "planets"],
    },
    Lesson {
        id: "underwater-world",
        title: "Secrets of the Ocean",
        description: "Dive deep into the underwater kingdom",
        level: LessonLevel::Advanced,
        duration: "10 min",
        completed: false,
        content: "Marine biologist Dr. Maya had always been fascinated by the mysteries hidden beneath the ocean waves. Armed with her advanced diving equipment and underwater camera, she embarked on an expedition to explore the deepest parts of the Pacific Ocean.\n\n\
As Maya descended into the abyss, she discovered a vibrant coral reef teeming with colorful fish, sea turtles, and exotic marine life. The reef was like an underwater rainbow, with corals of every imaginable color creating a living work of art.\n\n\
Deep in the ocean depths, Maya encountered a family of whales who seemed to communicate through beautiful songs that echoed through the water. She recorded their melodies, hoping to understand their complex language and social behaviors.\n\n\
Her most incredible discovery was an underwater cave system filled with bioluminescent creatures that glowed like living stars. These organisms created their own light through chemical reactions, illuminating the dark ocean depths with natural beauty.\n\n\
Maya's research helped protect marine ecosystems and educated people about the importance of preserving our oceans for future generations.",
        practice_words: &["biologist", "expedition", "bioluminescent", "ecosystems", "preservation", "organisms"],
    },
];

// ============================================================================
// Famous Speeches
// ============================================================================

pub const SPEECHES: &[Speech] = &[
    Speech {
        id: "mlk-dream",
        title: "I Have a Dream",
        speaker: "Martin Luther King Jr.",
        description: "A speech about equality and dreams",
        kid_friendly_text: "\"I have a dream that one day all children will play together, no matter what they look like. I dream that everyone will be kind to each other and treat each other fairly. We should judge people by how nice they are, not by the color of their skin.\"",
        quiz_words: &["dream", "children", "play", "together", "kind", "fairly"],
        quiz: QuizSentence {
            parts: &["I have a ", " that all ", " will play ", " and be ", " to each other."],
            answers: &["dream", "children", "together", "kind"],
        },
    },
    Speech {
        id: "peace-speech",
        title: "Words of Peace",
        speaker: "A Great Leader",
        description: "Learning about kindness and peace",
        kid_friendly_text: "\"Peace means being kind to everyone around us. When we are peaceful, we solve problems by talking, not fighting. We can make the world better by being helpful, sharing with others, and always choosing love over anger.\"",
        quiz_words: &["peace", "kind", "talking", "helpful", "sharing", "love"],
        quiz: QuizSentence {
            parts: &[
                "Peace means being ",
                " to everyone. We solve problems by ",
                ", and make the world better by being ",
                " and ",
                " with others.",
            ],
            answers: &["kind", "talking", "helpful", "sharing"],
        },
    },
];

// ============================================================================
// Academic Samples
// ============================================================================

pub const ACADEMIC_CLASSES: &[AcademicClass] = &[
    AcademicClass {
        id: "ukg",
        title: "UKG",
        description: "First words with animated pictures",
        age_group: "3-5 years",
        is_new: true,
        words: &[
            PracticeWord { word: "Apple", encouragement: "Yay! Apple is red and yummy! 🍎" },
            PracticeWord { word: "Ball", encouragement: "Woohoo! Ball bounces up and down! ⚽" },
            PracticeWord { word: "Car", encouragement: "Vroom vroom! Cars go fast! 🚗" },
            PracticeWord { word: "Duck", encouragement: "Quack quack! Ducks swim in water! 🦆" },
            PracticeWord { word: "Fish", encouragement: "Splash! Fish swim in the sea! 🐠" },
            PracticeWord { word: "Sun", encouragement: "Bright and shiny! Sun gives us light! ☀️" },
        ],
    },
    AcademicClass {
        id: "class-1-2",
        title: "Class 1-2",
        description: "Fun words for little learners",
        age_group: "5-7 years",
        is_new: false,
        words: &[
            PracticeWord { word: "Apple", encouragement: "Great job! Apples are yummy!" },
            PracticeWord { word: "Orange", encouragement: "Awesome! Oranges are so bright!" },
            PracticeWord { word: "Banana", encouragement: "Perfect! Bananas are sweet!" },
            PracticeWord { word: "Ball", encouragement: "Fantastic! Let's play ball!" },
            PracticeWord { word: "Cat", encouragement: "Wonderful! Cats say meow!" },
            PracticeWord { word: "Dog", encouragement: "Amazing! Dogs are friendly!" },
        ],
    },
    AcademicClass {
        id: "class-3-4",
        title: "Class 3-4",
        description: "Building vocabulary skills",
        age_group: "8-10 years",
        is_new: false,
        words: &[
            PracticeWord { word: "Butterfly", encouragement: "Excellent! Butterflies are beautiful!" },
            PracticeWord { word: "Rainbow", encouragement: "Brilliant! Rainbows have many colors!" },
            PracticeWord { word: "Mountain", encouragement: "Super! Mountains are tall!" },
            PracticeWord { word: "Ocean", encouragement: "Terrific! Oceans are deep and blue!" },
            PracticeWord { word: "Friendship", encouragement: "Outstanding! Friends are special!" },
            PracticeWord { word: "Adventure", encouragement: "Incredible! Let's go exploring!" },
        ],
    },
    AcademicClass {
        id: "class-5-6",
        title: "Class 5-6",
        description: "Advanced speaking practice",
        age_group: "11-13 years",
        is_new: false,
        words: &[
            PracticeWord { word: "Confidence", encouragement: "Excellent! You're speaking with confidence!" },
            PracticeWord { word: "Discovery", encouragement: "Amazing! Science helps us discover!" },
            PracticeWord { word: "Creativity", encouragement: "Wonderful! Art shows creativity!" },
            PracticeWord { word: "Perseverance", encouragement: "Outstanding! Never give up!" },
            PracticeWord { word: "Leadership", encouragement: "Fantastic! Be a great leader!" },
            PracticeWord { word: "Innovation", encouragement: "Brilliant! New ideas change the world!" },
        ],
    },
];

// ============================================================================
// Dashboard / Application landing
// ============================================================================

pub const DASHBOARD_MODULES: &[ModuleCard] = &[
    ModuleCard { title: "My Lessons", description: "Continue your speaking journey", target: View::MyLessons },
    ModuleCard { title: "Academic Samples", description: "Practice with school presentations", target: View::AcademicSamples },
    ModuleCard { title: "Custom Content", description: "Create your own speaking exercises", target: View::CustomContent },
    ModuleCard { title: "Famous Speeches", description: "Learn from the greatest speakers", target: View::FamousSpeeches },
    ModuleCard { title: "Chat with AI Coach", description: "Get personalized speaking tips", target: View::Chat },
    ModuleCard { title: "Learning Modules", description: "AI chat, academic content and IELTS", target: View::Application },
    ModuleCard { title: "Profile", description: "Your details and app settings", target: View::Profile },
];

pub const DASHBOARD_STATS: &[Stat] = &[
    Stat { value: "2h 45m", label: "Speaking Time" },
    Stat { value: "25", label: "Lessons Completed" },
    Stat { value: "7", label: "Streak Days" },
    Stat { value: "+23%", label: "Improvement" },
];

pub const APPLICATION_MODULES: &[ModuleCard] = &[
    ModuleCard { title: "AI CHAT", description: "Interactive AI coaching and conversation practice", target: View::Chat },
    ModuleCard { title: "ACADEMIC CONTENT", description: "School presentations and class-based learning", target: View::AcademicSamples },
    ModuleCard { title: "IELTS", description: "Reading, Writing, Listening, Speaking preparation", target: View::Ielts },
];

// ============================================================================
// Home / About
// ============================================================================

pub const HOME_LINKS: &[ModuleCard] = &[
    ModuleCard { title: "GET STARTED", description: "Create your free account", target: View::Signup },
    ModuleCard { title: "SIGN IN", description: "Access your learning portal", target: View::Login },
    ModuleCard { title: "ABOUT US", description: "Learn about our mission", target: View::About },
    ModuleCard { title: "CONTACT", description: "Get in touch with us", target: View::Contact },
];

pub const HOME_FEATURES: &[Feature] = &[
    Feature { title: "AI-Powered Learning", description: "Advanced speech recognition technology provides instant feedback on pronunciation, pace, and clarity" },
    Feature { title: "Expert-Designed Curriculum", description: "Lessons crafted by professional speech coaches and educators to ensure effective learning outcomes" },
    Feature { title: "Interactive Practice", description: "Engaging exercises, real-world scenarios, and gamified learning to keep students motivated" },
    Feature { title: "Safe & Secure", description: "Child-safe environment with privacy protection and parental controls built-in" },
];

pub const HOME_STATS: &[Stat] = &[
    Stat { value: "500K+", label: "Total Downloads" },
    Stat { value: "250K+", label: "Active Students" },
    Stat { value: "150+", label: "Countries" },
    Stat { value: "1M+", label: "Lessons Completed" },
];

pub const ABOUT_FEATURES: &[Feature] = &[
    Feature { title: "Our Mission", description: "To empower children worldwide with confident speaking skills through AI-powered learning" },
    Feature { title: "Kid-Friendly", description: "Designed with children in mind - safe, engaging, and encouragingly fun!" },
    Feature { title: "Expert-Crafted", description: "Lessons developed by speech experts and education professionals" },
    Feature { title: "AI-Powered", description: "Advanced pronunciation analysis and personalized feedback" },
    Feature { title: "Community", description: "Join thousands of children improving their speaking skills daily" },
    Feature { title: "Fun Learning", description: "Interactive stories, games, and activities that make learning enjoyable" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "10,000+", label: "Active Students" },
    Stat { value: "50,000+", label: "Lessons Completed" },
    Stat { value: "95%", label: "Satisfaction Rate" },
];

// ============================================================================
// Chat
// ============================================================================

pub const CHAT_GREETING: &str = "Hi there! 👋 I'm your friendly AI Speaking Coach! I'm here to help you become an amazing speaker! What would you like to practice today?";

pub const QUICK_QUESTIONS: &[&str] = &[
    "How can I speak more clearly?",
    "Can you give me a practice story?",
    "Tips for confident speaking",
    "Help with pronunciation",
];

pub const REPLY_CLEAR: &str = "Great question! 🌟 To speak more clearly, try these tips:\n\n1. 🗣️ Speak slowly and take your time\n2. 💨 Take deep breaths before speaking\n3. 👄 Open your mouth wider when you talk\n4. 📚 Practice reading out loud every day\n\nWould you like to try a practice exercise?";

pub const REPLY_STORY: &str = "I'd love to share a story! 📖✨\n\nOnce there was a little star named Sparkle who wanted to shine the brightest. Every night, Sparkle practiced twinkling until she became the most beautiful star in the sky! 🌟\n\nThe lesson? Practice makes perfect! Would you like to read this story aloud?";

pub const REPLY_CONFIDENT: &str = "You've got this! 💪✨ Here are my top tips for confident speaking:\n\n1. 🦸 Stand tall and smile\n2. 👀 Look at your audience\n3. 🎵 Use your natural voice\n4. ❤️ Be yourself - you're amazing!\n5. 🌟 Remember: Everyone makes mistakes, and that's okay!\n\nWhat would you like to practice?";

pub const REPLY_PRONUNCIATION: &str = "Pronunciation is so important! 🎯 Let's work on it together:\n\n1. 👂 Listen carefully to words\n2. 🔄 Break big words into small parts\n3. 🎬 Practice saying them slowly\n4. 🎤 Record yourself and listen back\n\nWant to try pronouncing some fun words?";

pub const REPLY_DEFAULT: &str = "That's a wonderful question! 🌈 I'm here to help you with:\n\n✨ Speaking clearly\n📚 Reading practice\n🎤 Pronunciation\n💪 Building confidence\n🎯 Presentation skills\n\nWhat would you like to explore?";

// ============================================================================
// IELTS
// ============================================================================

pub const IELTS_SECTIONS: &[IeltsSection] = &[
    IeltsSection {
        title: "Reading",
        summary: "Skim passages and find key information quickly",
        tips: &[
            "Read the questions before the passage",
            "Underline names, dates and numbers",
            "Do not get stuck on one hard question",
        ],
    },
    IeltsSection {
        title: "Writing",
        summary: "Plan clear paragraphs with one idea each",
        tips: &[
            "Spend a few minutes planning before you write",
            "Use linking words like however and therefore",
            "Leave time to check spelling",
        ],
    },
    IeltsSection {
        title: "Listening",
        summary: "Follow conversations and catch the details",
        tips: &[
            "Predict the type of answer before the audio plays",
            "Watch for words that change the meaning, like not",
            "Write answers as you hear them",
        ],
    },
    IeltsSection {
        title: "Speaking",
        summary: "Answer each prompt out loud and get a band score",
        tips: &[
            "Give reasons and examples, not one-word answers",
            "Speak at a steady pace",
            "It is fine to pause and think",
        ],
    },
];

/// Index of the section that runs the recording practice.
pub const IELTS_SPEAKING_SECTION: usize = 3;

pub const IELTS_SPEAKING_PROMPTS: &[&str] = &[
    "Describe your favourite place to relax.",
    "Talk about a book you enjoyed reading.",
    "Describe a person who has helped you learn something.",
    "Talk about a festival that is important in your country.",
];

// ============================================================================
// Custom content / Profile defaults
// ============================================================================

pub const SAMPLE_CUSTOM_TITLE: &str = "My Favorite Story";
pub const SAMPLE_CUSTOM_CONTENT: &str = "Once upon a time, there was a brave little rabbit who loved adventures. Every day, the rabbit would explore new places and make new friends.";

pub const PROFILE_NAME: &str = "John Smith";
pub const PROFILE_EMAIL: &str = "john.smith@email.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_six_words() {
        assert_eq!(ACADEMIC_CLASSES.len(), 4);
        for class in ACADEMIC_CLASSES {
            assert_eq!(class.words.len(), 6, "{}", class.id);
        }
    }

    #[test]
    fn test_quiz_parts_match_blanks() {
        for speech in SPEECHES {
            assert_eq!(speech.quiz.blank_count(), 4);
            assert_eq!(speech.quiz.parts.len(), speech.quiz.blank_count() + 1);
            for answer in speech.quiz.answers {
                assert!(speech.quiz_words.contains(answer), "{} missing {}", speech.id, answer);
            }
        }
    }

    #[test]
    fn test_module_cards_use_table_entries() {
        use crate::domain::navigation::{transition, NavAction};

        for card in DASHBOARD_MODULES {
            assert_eq!(transition(View::Dashboard, NavAction::Open(card.target)), Some(card.target));
        }
        for card in APPLICATION_MODULES {
            assert_eq!(transition(View::Application, NavAction::Open(card.target)), Some(card.target));
        }
        for card in HOME_LINKS {
            assert_eq!(transition(View::Home, NavAction::Open(card.target)), Some(card.target));
        }
    }

    #[test]
    fn test_speaking_section_index() {
        assert_eq!(IELTS_SECTIONS[IELTS_SPEAKING_SECTION].title, "Speaking");
    }
}
