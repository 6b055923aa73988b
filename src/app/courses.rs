// SPDX-License-Identifier: MPL-2.0
//! In-memory course catalog backing the demo page.

/// Identifier of a course row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub instructor: String,
    pub sessions: u32,
    pub published: bool,
}

impl Course {
    fn new(id: u32, name: &str, instructor: &str, sessions: u32, published: bool) -> Self {
        Self {
            id: CourseId(id),
            name: name.to_string(),
            instructor: instructor.to_string(),
            sessions,
            published,
        }
    }
}

/// Ordered list of courses with the mutations the page performs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Seed data shown when the dashboard starts.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            courses: vec![
                Course::new(1, "Welding Fundamentals", "A. Moreau", 12, true),
                Course::new(2, "Industrial Electricity", "J. Okafor", 18, true),
                Course::new(3, "Forklift Certification", "L. Brandt", 4, false),
                Course::new(4, "Culinary Arts I", "M. Rossi", 20, true),
                Course::new(5, "Plumbing Basics", "S. Novak", 10, false),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Removes a course, returning it if it existed.
    pub fn remove(&mut self, id: CourseId) -> Option<Course> {
        let index = self.courses.iter().position(|course| course.id == id)?;
        Some(self.courses.remove(index))
    }

    /// Flips the published flag, returning the new state.
    pub fn toggle_published(&mut self, id: CourseId) -> Option<bool> {
        let course = self.courses.iter_mut().find(|course| course.id == id)?;
        course.published = !course.published;
        Some(course.published)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_keeps_order_of_remaining_rows() {
        let mut catalog = Catalog::sample();
        let removed = catalog.remove(CourseId(2)).expect("course 2 exists");
        assert_eq!(removed.name, "Industrial Electricity");

        let ids: Vec<u32> = catalog.iter().map(|course| course.id.0).collect();
        assert_eq!(ids, [1, 3, 4, 5]);
        assert!(catalog.remove(CourseId(2)).is_none());
    }

    #[test]
    fn toggle_published_flips_flag() {
        let mut catalog = Catalog::sample();
        assert_eq!(catalog.toggle_published(CourseId(3)), Some(true));
        assert_eq!(catalog.toggle_published(CourseId(3)), Some(false));
        assert_eq!(catalog.toggle_published(CourseId(99)), None);
    }
}
