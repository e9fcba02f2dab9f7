//! Record generation from templates.
//!
//! Every record is an independent structural copy of the templates with its
//! identifying fields replaced. Records are produced in sequence-index order;
//! only the field values are random.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::identifier::{email_suffix, generate_email, generate_object_id, generate_user_id};
use crate::record::UserRecord;
use crate::template::Templates;

/// Builds user records from a pair of templates.
///
/// # Example
///
/// ```
/// use mock_users::{RecordGenerator, Templates};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let generator = RecordGenerator::new(Templates::builtin().expect("templates"));
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let users = generator.generate_records(&mut rng, 3);
///
/// assert_eq!(users.len(), 3);
/// assert!(users[1].email.starts_with("user2_"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    templates: Templates,
}

impl RecordGenerator {
    /// Creates a generator over the given templates.
    #[must_use]
    pub const fn new(templates: Templates) -> Self {
        Self { templates }
    }

    /// Returns the templates records are cloned from.
    #[must_use]
    pub const fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Generates the record at `sequence_index`.
    ///
    /// The user and profile templates are cloned, then `id`, `user_id`,
    /// `email` and every photo `id` are replaced with fresh values drawn from
    /// `rng`. The template identifiers are placeholders and never reused.
    pub fn generate_record<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sequence_index: usize,
    ) -> UserRecord {
        let mut user = self.templates.user().clone();
        user.profile = self.templates.profile().clone();

        user.id = generate_object_id(rng);
        user.user_id = generate_user_id(rng);
        user.email = generate_email(sequence_index, &email_suffix(rng));

        for photo in &mut user.profile.photos {
            photo.id = generate_object_id(rng);
        }

        debug!(
            sequence_index,
            id = %user.id,
            email = %user.email,
            "generated user record"
        );
        user
    }

    /// Generates `count` records for sequence indices `0..count`, in order.
    pub fn generate_records<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|sequence_index| self.generate_record(rng, sequence_index))
            .collect()
    }
}

/// Generates `count` users, seeded when `seed` is given.
///
/// With a seed the output is identical across calls; without one the
/// thread-local OS-seeded generator is used.
///
/// # Example
///
/// ```
/// use mock_users::{Templates, generate_users};
///
/// let templates = Templates::builtin().expect("templates");
/// let first = generate_users(&templates, 2, Some(2026));
/// let second = generate_users(&templates, 2, Some(2026));
///
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn generate_users(templates: &Templates, count: usize, seed: Option<u64>) -> Vec<UserRecord> {
    let generator = RecordGenerator::new(templates.clone());
    match seed {
        Some(value) => generator.generate_records(&mut ChaCha8Rng::seed_from_u64(value), count),
        None => generator.generate_records(&mut rand::rng(), count),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::record::ProfileRecord;

    #[fixture]
    fn generator() -> RecordGenerator {
        RecordGenerator::new(Templates::builtin().expect("bundled templates"))
    }

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Returns the record with every per-record field reset to the template's.
    fn with_template_identity(record: &UserRecord, templates: &Templates) -> UserRecord {
        let mut normalized = record.clone();
        let template = templates.user();
        normalized.id = template.id.clone();
        normalized.user_id = template.user_id;
        normalized.email.clone_from(&template.email);
        for (photo, template_photo) in normalized
            .profile
            .photos
            .iter_mut()
            .zip(&templates.profile().photos)
        {
            photo.id = template_photo.id.clone();
        }
        normalized
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(20)]
    fn generates_requested_count(
        generator: RecordGenerator,
        mut rng: ChaCha8Rng,
        #[case] count: usize,
    ) {
        assert_eq!(generator.generate_records(&mut rng, count).len(), count);
    }

    #[rstest]
    fn identifiers_are_pairwise_distinct(generator: RecordGenerator, mut rng: ChaCha8Rng) {
        let users = generator.generate_records(&mut rng, 200);

        let ids: HashSet<_> = users.iter().map(|u| u.id.clone()).collect();
        let user_ids: HashSet<_> = users.iter().map(|u| u.user_id).collect();
        let emails: HashSet<_> = users.iter().map(|u| u.email.clone()).collect();
        let photo_ids: HashSet<_> = users
            .iter()
            .flat_map(|u| u.profile.photos.iter().map(|p| p.id.clone()))
            .collect();

        assert_eq!(ids.len(), users.len());
        assert_eq!(user_ids.len(), users.len());
        assert_eq!(emails.len(), users.len());
        assert_eq!(photo_ids.len(), users.len());
    }

    #[rstest]
    fn template_identifiers_are_never_reused(generator: RecordGenerator, mut rng: ChaCha8Rng) {
        let template = generator.templates().clone();
        let template_photo_id = template
            .profile()
            .photos
            .first()
            .map(|photo| photo.id.clone());

        for user in generator.generate_records(&mut rng, 20) {
            assert_ne!(user.id, template.user().id);
            assert_ne!(user.user_id, template.user().user_id);
            assert_ne!(user.email, template.user().email);
            assert_ne!(
                user.profile.photos.first().map(|photo| photo.id.clone()),
                template_photo_id
            );
        }
    }

    #[rstest]
    fn non_identifying_fields_match_templates(generator: RecordGenerator, mut rng: ChaCha8Rng) {
        let templates = generator.templates().clone();
        let mut expected = templates.user().clone();
        expected.profile = templates.profile().clone();

        for user in generator.generate_records(&mut rng, 5) {
            assert_eq!(with_template_identity(&user, &templates), expected);
        }
    }

    #[rstest]
    fn records_replace_the_profile_placeholder(generator: RecordGenerator, mut rng: ChaCha8Rng) {
        let user = generator.generate_record(&mut rng, 0);

        assert_ne!(user.profile, ProfileRecord::default());
        assert_eq!(user.profile.first_name, "Sanjay");
    }

    #[rstest]
    fn mutating_one_record_leaves_others_untouched(
        generator: RecordGenerator,
        mut rng: ChaCha8Rng,
    ) {
        let mut users = generator.generate_records(&mut rng, 2);
        let second_before = users.get(1).map(|u| u.profile.photos.clone());
        let template_before = generator.templates().profile().photos.clone();

        if let Some(first) = users.first_mut() {
            first.profile.photos.clear();
            first.profile.interests.push("skydiving".to_owned());
        }

        assert_eq!(users.get(1).map(|u| u.profile.photos.clone()), second_before);
        assert_eq!(generator.templates().profile().photos, template_before);
        assert_eq!(generator.templates().profile().interests.len(), 16);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let templates = Templates::builtin().expect("bundled templates");

        let first = generate_users(&templates, 10, Some(7));
        let second = generate_users(&templates, 10, Some(7));

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_users() {
        let templates = Templates::builtin().expect("bundled templates");

        let first = generate_users(&templates, 1, Some(1));
        let second = generate_users(&templates, 1, Some(2));

        assert_ne!(
            first.first().map(|u| u.id.clone()),
            second.first().map(|u| u.id.clone())
        );
    }

    #[test]
    fn unseeded_generation_produces_distinct_batches() {
        let templates = Templates::builtin().expect("bundled templates");

        let first = generate_users(&templates, 3, None);
        let second = generate_users(&templates, 3, None);

        assert_eq!(first.len(), 3);
        assert_ne!(first, second);
    }
}
