#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mongodb::bson::{self, Bson, doc};

    use crate::database::document::{RecipeDocument, update_document};
    use crate::database::{DatabaseConfig, DatabaseConnections, MongoRecipeRepository};
    use larder_core::domain::{Difficulty, NewRecipe, Recipe, RecipeId, timestamp_now};
    use larder_core::pagination::PageRequest;
    use larder_core::ports::RecipeRepository;

    fn tea() -> NewRecipe {
        NewRecipe {
            name: "Tea".to_owned(),
            ingredients: vec!["water".to_owned(), "tea leaf".to_owned()],
            instructions: "boil".to_owned(),
            prep_time_minutes: 1.0,
            cook_time_minutes: 5.0,
            servings: 1.0,
            difficulty: Difficulty::Easy,
            cuisine: "Any".to_owned(),
            calories_per_serving: 2.0,
            tags: Vec::new(),
            user_id: None,
            image: None,
            rating: 0.0,
        }
    }

    #[test]
    fn test_document_round_trip() {
        let id = RecipeId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
        let recipe = Recipe::create(id, tea(), timestamp_now());

        let document = RecipeDocument::try_from(&recipe).unwrap();
        assert_eq!(document.id.to_hex(), "65f1a2b3c4d5e6f708192a3b");

        let stored = bson::to_document(&document).unwrap();
        assert!(matches!(stored.get("_id"), Some(Bson::ObjectId(_))));
        assert!(matches!(stored.get("createdAt"), Some(Bson::DateTime(_))));
        assert_eq!(stored.get("image"), Some(&Bson::Null));
        assert!(stored.get("userId").is_none());

        let back: RecipeDocument = bson::from_document(stored).unwrap();
        assert_eq!(Recipe::try_from(back).unwrap(), recipe);
    }

    #[test]
    fn test_reads_documents_written_by_other_tools() {
        let now = bson::DateTime::now();
        let stored = doc! {
            "_id": bson::oid::ObjectId::new(),
            "name": "Pancakes",
            "ingredients": ["flour", "milk"],
            "instructions": "mix and fry",
            "prepTimeMinutes": 10,
            "cookTimeMinutes": 15,
            "servings": 2.5,
            "difficulty": "Medium",
            "cuisine": "American",
            "caloriesPerServing": 5_000_000_000_i64,
            "rating": 4,
            "createdAt": now,
            "updatedAt": now,
            "__v": 0,
        };

        let document: RecipeDocument = bson::from_document(stored).unwrap();
        let recipe = Recipe::try_from(document).unwrap();

        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.prep_time_minutes, 10.0);
        assert_eq!(recipe.servings, 2.5);
        assert_eq!(recipe.calories_per_serving, 5e9);
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.rating, 4.0);
        assert_eq!(recipe.review_count, 0.0);
    }

    #[test]
    fn test_update_document_keeps_owner_when_absent() {
        let set = update_document(tea(), timestamp_now());
        assert!(set.get("userId").is_none());
        assert!(set.get("_id").is_none());
        assert!(set.get("createdAt").is_none());
        assert_eq!(set.get_str("difficulty").unwrap(), "Easy");

        let mut owned = tea();
        owned.user_id = Some("user-7".to_owned());
        let set = update_document(owned, timestamp_now());
        assert_eq!(set.get_str("userId").unwrap(), "user-7");
    }

    async fn get_test_repo() -> Option<MongoRecipeRepository> {
        let mut config = DatabaseConfig::new(
            std::env::var("MONGO_TEST_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27018".to_string()),
        );
        config.database = Some(format!("larder_test_{}", uuid::Uuid::new_v4().simple()));
        config.server_selection_timeout = Duration::from_secs(1);
        config.connect_timeout = Duration::from_secs(1);

        let connections = DatabaseConnections::init(&config).await.ok()?;
        Some(MongoRecipeRepository::new(&connections.main))
    }

    #[tokio::test]
    async fn test_mongo_crud_cycle() {
        let repo = match get_test_repo().await {
            Some(r) => r,
            None => {
                tracing::warn!("MongoDB not available, skipping test");
                return;
            }
        };

        let created = repo.create(tea()).await.unwrap();
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created.clone()));

        let mut fields = tea();
        fields.rating = 5.0;
        let updated = repo
            .update_by_id(&created.id, fields)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.rating, 5.0);
        assert_eq!(updated.created_at, created.created_at);

        let deleted = repo.delete_by_id(&created.id).await.unwrap();
        assert_eq!(deleted.map(|r| r.id), Some(created.id.clone()));
        assert_eq!(repo.delete_by_id(&created.id).await.unwrap(), None);

        repo.collection().drop().await.unwrap();
    }

    #[tokio::test]
    async fn test_mongo_list_pagination() {
        let repo = match get_test_repo().await {
            Some(r) => r,
            None => return,
        };

        for i in 0..25 {
            let mut fields = tea();
            fields.name = format!("Recipe {i}");
            repo.create(fields).await.unwrap();
            // Distinct creation timestamps keep the ordering deterministic.
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        let first = repo.list(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages(), 3);
        assert_eq!(first.items[0].name, "Recipe 24");

        let last = repo.list(PageRequest::new(3, 10)).await.unwrap();
        assert_eq!(last.items.len(), 5);
        assert!(!last.has_next());

        let beyond = repo.list(PageRequest::new(2, u64::MAX)).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 25);

        repo.collection().drop().await.unwrap();
    }
}
