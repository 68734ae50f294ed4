//! Repository Integration Tests
//!
//! Tests against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::domain::{ActivityKind, ActivityLog, Link, LinkKind, Project, QuickLink, Task, TodoItem};
    use crate::repository::{
        init_db, share, ActivityLogRepository, LinkRepository, OwnedRepository, ProjectRepository,
        QuickLinkRepository, Repository, SharedConnection, TaskRepository, TodoRepository,
        UserRepository,
    };

    const TS: &str = "2026-08-06T12:00:00Z";

    fn test_conn() -> SharedConnection {
        let conn = init_db(Path::new(":memory:")).expect("Failed to init test DB");
        share(conn)
    }

    fn sample_project(owner: u32, name: &str) -> Project {
        Project::new(
            0,
            owner,
            name.to_string(),
            "desc".to_string(),
            "#8B5CF6".to_string(),
            TS.to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_project_scenario() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn.clone());
        let links = LinkRepository::new(conn);

        let created = projects.create(&sample_project(1, "Demo")).await.expect("Failed to create");
        assert!(created.id > 0);
        assert_eq!(created.progress, 0);

        links
            .create(&Link {
                id: 0,
                project_id: created.id,
                kind: LinkKind::File,
                path: "/tmp".to_string(),
                timestamp: TS.to_string(),
            })
            .await
            .expect("Failed to add link");

        let details = projects.list_detailed_by_owner(1).await.expect("Fetch failed");
        assert_eq!(details.len(), 1);

        let detail = &details[0];
        assert_eq!(detail.project.name, "Demo");
        assert_eq!(detail.project.description, "desc");
        assert_eq!(detail.project.progress, 0);
        assert_eq!(detail.links.len(), 1);
        assert_eq!(detail.links[0].kind, LinkKind::File);
        assert_eq!(detail.links[0].path, "/tmp");
        assert!(detail.tasks.is_empty());
        assert!(detail.activity_logs.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_is_owner_scoped() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn.clone());
        let todos = TodoRepository::new(conn);

        projects.create(&sample_project(1, "Mine")).await.unwrap();
        projects.create(&sample_project(2, "Theirs")).await.unwrap();

        let mine = projects.list_by_owner(1).await.expect("List failed");
        assert_eq!(mine.len(), 1);
        assert!(mine.iter().all(|p| p.owner == 1));

        let detailed = projects.list_detailed_by_owner(1).await.unwrap();
        assert_eq!(detailed.len(), 1);
        assert_eq!(detailed[0].project.name, "Mine");

        todos
            .create(&TodoItem {
                id: 0,
                owner: 2,
                content: "not yours".to_string(),
                completed: false,
                timestamp: TS.to_string(),
            })
            .await
            .unwrap();
        assert!(todos.list_by_owner(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn.clone());
        let links = LinkRepository::new(conn.clone());
        let tasks = TaskRepository::new(conn.clone());
        let activity = ActivityLogRepository::new(conn);

        let project = projects.create(&sample_project(1, "Doomed")).await.unwrap();
        links
            .create(&Link {
                id: 0,
                project_id: project.id,
                kind: LinkKind::Url,
                path: "https://example.com".to_string(),
                timestamp: TS.to_string(),
            })
            .await
            .unwrap();
        tasks
            .create(&Task {
                id: 0,
                project_id: project.id,
                content: "ship it".to_string(),
                completed: false,
                timestamp: TS.to_string(),
                due_date: None,
            })
            .await
            .unwrap();
        activity
            .append(&ActivityLog {
                id: 0,
                project_id: project.id,
                kind: ActivityKind::LinkAdded,
                description: "Added 1 new link(s)".to_string(),
                timestamp: TS.to_string(),
            })
            .await
            .unwrap();

        projects.delete(project.id).await.expect("Delete failed");

        assert!(projects.find_by_id(project.id).await.unwrap().is_none());
        assert!(projects.list_detailed_by_owner(1).await.unwrap().is_empty());
        assert!(links.list_by_project(project.id).await.unwrap().is_empty());
        assert!(tasks.list_by_project(project.id).await.unwrap().is_empty());
        assert!(activity.list_by_project(project.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleted_id_never_reassigned() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn);

        let first = projects.create(&sample_project(1, "First")).await.unwrap();
        projects.delete(first.id).await.unwrap();

        let second = projects.create(&sample_project(1, "Second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let listed = projects.list_by_owner(1).await.unwrap();
        assert!(listed.iter().all(|p| p.id != first.id));
    }

    #[tokio::test]
    async fn test_task_toggle_round_trip() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn.clone());
        let tasks = TaskRepository::new(conn);

        let project = projects.create(&sample_project(1, "Demo")).await.unwrap();
        let task = tasks
            .create(&Task {
                id: 0,
                project_id: project.id,
                content: "flip me".to_string(),
                completed: false,
                timestamp: TS.to_string(),
                due_date: None,
            })
            .await
            .unwrap();

        let toggled = tasks.set_completed(task.id, true).await.expect("Toggle failed");
        assert!(toggled.completed);

        let restored = tasks.set_completed(task.id, false).await.expect("Toggle failed");
        assert_eq!(restored, task);
    }

    #[tokio::test]
    async fn test_progress_update_persists() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn);

        let project = projects.create(&sample_project(1, "Demo")).await.unwrap();

        let stepped = Project {
            progress: Project::step_progress(project.progress, true),
            ..project.clone()
        };
        projects.update(&stepped).await.expect("Update failed");

        let found = projects.find_by_id(project.id).await.unwrap().unwrap();
        assert_eq!(found.progress, 5);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_rows_untouched() {
        let conn = test_conn();
        let todos = TodoRepository::new(conn);

        let todo = todos
            .create(&TodoItem {
                id: 0,
                owner: 1,
                content: "stay put".to_string(),
                completed: false,
                timestamp: TS.to_string(),
            })
            .await
            .unwrap();

        let before = todos.list_by_owner(1).await.unwrap();
        assert!(todos.set_completed(todo.id + 999, true).await.is_err());
        let after = todos.list_by_owner(1).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_quick_link_claim_adopts_only_unowned() {
        let conn = test_conn();
        let quick_links = QuickLinkRepository::new(conn);

        quick_links
            .create(&QuickLink {
                id: 0,
                owner: None,
                title: "Docs".to_string(),
                url: "https://docs.rs".to_string(),
                icon: "book".to_string(),
                color: "#64748B".to_string(),
                timestamp: Some(TS.to_string()),
            })
            .await
            .unwrap();
        let theirs = quick_links
            .create(&QuickLink {
                id: 0,
                owner: Some(2),
                title: "Repo".to_string(),
                url: "https://github.com".to_string(),
                icon: "github".to_string(),
                color: "#64748B".to_string(),
                timestamp: Some(TS.to_string()),
            })
            .await
            .unwrap();

        assert_eq!(quick_links.claim_unowned(1).await.unwrap(), 1);
        assert_eq!(quick_links.claim_unowned(1).await.unwrap(), 0);

        let mine = quick_links.list_by_owner(1).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Docs");

        let untouched = quick_links.find_by_id(theirs.id).await.unwrap().unwrap();
        assert_eq!(untouched.owner, Some(2));
    }

    #[tokio::test]
    async fn test_quick_link_edit_and_delete() {
        let conn = test_conn();
        let quick_links = QuickLinkRepository::new(conn);

        let link = quick_links
            .create(&QuickLink {
                id: 0,
                owner: Some(1),
                title: "Old".to_string(),
                url: "https://old.example".to_string(),
                icon: "external-link".to_string(),
                color: "#64748B".to_string(),
                timestamp: Some(TS.to_string()),
            })
            .await
            .unwrap();

        let edited = QuickLink {
            title: "New".to_string(),
            url: "https://new.example".to_string(),
            ..link.clone()
        };
        quick_links.update(&edited).await.expect("Update failed");

        let found = quick_links.find_by_id(link.id).await.unwrap().unwrap();
        assert_eq!(found.title, "New");
        assert_eq!(found.url, "https://new.example");

        quick_links.delete(link.id).await.expect("Delete failed");
        assert!(quick_links.list_by_owner(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_ensure_is_idempotent() {
        let conn = test_conn();
        let users = UserRepository::new(conn);

        let first = users.ensure("operator@devboard.local", TS).await.expect("Ensure failed");
        let second = users.ensure("operator@devboard.local", "2026-08-07T00:00:00Z").await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.created_at, TS);

        users.set_credential(first.id, "digest").await.expect("Set credential failed");
        let found = users.find_by_email("operator@devboard.local").await.unwrap().unwrap();
        assert_eq!(found.credential, "digest");
    }

    #[tokio::test]
    async fn test_project_children_order_newest_first() {
        let conn = test_conn();
        let projects = ProjectRepository::new(conn.clone());
        let tasks = TaskRepository::new(conn);

        let project = projects.create(&sample_project(1, "Demo")).await.unwrap();
        for (content, ts) in [("first", "2026-08-06T10:00:00Z"), ("second", "2026-08-06T11:00:00Z")] {
            tasks
                .create(&Task {
                    id: 0,
                    project_id: project.id,
                    content: content.to_string(),
                    completed: false,
                    timestamp: ts.to_string(),
                    due_date: None,
                })
                .await
                .unwrap();
        }

        let details = projects.list_detailed_by_owner(1).await.unwrap();
        let listed: Vec<&str> = details[0].tasks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(listed, vec!["second", "first"]);
    }
}
