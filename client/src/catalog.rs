//! Static course catalog and dashboard sample data.
//!
//! There is no course service yet; pages read from these tables directly.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a filter value; anything unrecognized (including "All Levels")
    /// means "no filter".
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub instructor: &'static str,
    pub duration: &'static str,
    pub students: u32,
    pub rating: f32,
    pub price_cents: u32,
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub title: &'static str,
    pub lessons: &'static [&'static str],
    pub duration: &'static str,
}

/// Extra material shown on the course detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetail {
    pub course_id: &'static str,
    pub long_description: &'static str,
    pub instructor_title: &'static str,
    pub instructor_image: &'static str,
    pub reviews: u32,
    pub prerequisites: &'static [&'static str],
    pub chapters: &'static [Chapter],
}

impl CourseDetail {
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.chapters.iter().map(|c| c.lessons.len()).sum()
    }
}

static COURSES: [Course; 3] = [
    Course {
        id: "1",
        title: "Introduction to Machine Learning",
        description: "Learn the fundamentals of machine learning and AI",
        image: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg",
        instructor: "Dr. Sarah Johnson",
        duration: "8 weeks",
        students: 2543,
        rating: 4.8,
        price_cents: 9999,
        level: Level::Intermediate,
    },
    Course {
        id: "2",
        title: "Web Development Bootcamp",
        description: "Complete guide to modern web development",
        image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg",
        instructor: "Mike Wilson",
        duration: "12 weeks",
        students: 3821,
        rating: 4.9,
        price_cents: 14_999,
        level: Level::Beginner,
    },
    Course {
        id: "3",
        title: "Data Science Fundamentals",
        description: "Master the basics of data science and analytics",
        image: "https://images.pexels.com/photos/569360/pexels-photo-569360.jpeg",
        instructor: "Dr. Emily Chen",
        duration: "10 weeks",
        students: 1987,
        rating: 4.7,
        price_cents: 12_999,
        level: Level::Beginner,
    },
];

static DETAILS: [CourseDetail; 1] = [CourseDetail {
    course_id: "1",
    long_description: "Learn the fundamentals of machine learning and AI through hands-on projects and \
                       real-world applications. This comprehensive course covers everything from basic \
                       concepts to advanced techniques.",
    instructor_title: "AI Research Scientist",
    instructor_image: "https://images.pexels.com/photos/3796217/pexels-photo-3796217.jpeg",
    reviews: 342,
    prerequisites: &["Basic Python programming", "Fundamental mathematics", "Statistics basics"],
    chapters: &[
        Chapter {
            title: "Introduction to ML Concepts",
            lessons: &["What is Machine Learning?", "Types of ML", "Applications of ML"],
            duration: "2 hours",
        },
        Chapter {
            title: "Data Preprocessing",
            lessons: &["Data Cleaning", "Feature Engineering", "Data Transformation"],
            duration: "3 hours",
        },
        Chapter {
            title: "Supervised Learning",
            lessons: &["Linear Regression", "Classification", "Decision Trees"],
            duration: "4 hours",
        },
    ],
}];

#[must_use]
pub fn courses() -> &'static [Course] {
    &COURSES
}

#[must_use]
pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

/// Course plus detail material; `None` unless both exist.
#[must_use]
pub fn course_with_detail(id: &str) -> Option<(&'static Course, &'static CourseDetail)> {
    let course = find_course(id)?;
    let detail = DETAILS.iter().find(|d| d.course_id == id)?;
    Some((course, detail))
}

#[must_use]
pub fn filter_by_level(level: Option<Level>) -> Vec<&'static Course> {
    COURSES.iter().filter(|c| level.is_none_or(|l| c.level == l)).collect()
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseProgress {
    pub id: &'static str,
    pub title: &'static str,
    /// Percent complete, 0–100.
    pub progress: u8,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentStatus {
    Upcoming,
    Pending,
}

impl AssessmentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpcomingAssessment {
    pub id: &'static str,
    pub title: &'static str,
    pub course: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub due_date: &'static str,
    pub status: AssessmentStatus,
}

pub static STATS: [Stat; 4] = [
    Stat { label: "Courses", value: "7" },
    Stat { label: "Completed", value: "3" },
    Stat { label: "Hours", value: "42" },
    Stat { label: "Certificates", value: "2" },
];

pub static IN_PROGRESS: [CourseProgress; 3] = [
    CourseProgress {
        id: "1",
        title: "Introduction to Machine Learning",
        progress: 65,
        image: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg",
    },
    CourseProgress {
        id: "2",
        title: "Advanced JavaScript Concepts",
        progress: 32,
        image: "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg",
    },
    CourseProgress {
        id: "3",
        title: "Data Science Fundamentals",
        progress: 78,
        image: "https://images.pexels.com/photos/569360/pexels-photo-569360.jpeg",
    },
];

pub static RECOMMENDED: [Recommendation; 3] = [
    Recommendation {
        id: "4",
        title: "Python for Data Analysis",
        category: "Programming",
        rating: 4.8,
        image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg",
    },
    Recommendation {
        id: "5",
        title: "Web Development Bootcamp",
        category: "Web Development",
        rating: 4.9,
        image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg",
    },
    Recommendation {
        id: "6",
        title: "UX/UI Design Principles",
        category: "Design",
        rating: 4.7,
        image: "https://images.pexels.com/photos/196645/pexels-photo-196645.jpeg",
    },
];

pub static UPCOMING_ASSESSMENTS: [UpcomingAssessment; 2] = [
    UpcomingAssessment {
        id: "1",
        title: "Machine Learning Midterm",
        course: "Introduction to Machine Learning",
        due_date: "2025-05-15",
        status: AssessmentStatus::Upcoming,
    },
    UpcomingAssessment {
        id: "2",
        title: "JavaScript Functions Quiz",
        course: "Advanced JavaScript Concepts",
        due_date: "2025-05-10",
        status: AssessmentStatus::Pending,
    },
];
