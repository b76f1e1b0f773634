//! Seeds the default admin account and starter portfolio content.
//!
//! Every insert is guarded so re-running against a populated database is a no-op.
//! The admin password is `password` (bcrypt, cost 10); change it after first login.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEFAULT_ADMIN_HASH: &str = "$2a$10$92IXUNpkjO0rOQ5byMi.Ye4oKoEa3Ro9llC/.og/at2.uheWG/igi";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&format!(
            r#"
            INSERT INTO admin_users (username, password_hash, role)
            VALUES ('admin', '{DEFAULT_ADMIN_HASH}', 'admin')
            ON CONFLICT (username) DO NOTHING;
            "#
        ))
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO profiles (name, title, bio, email, github, linkedin, profile_image)
            SELECT
                'John Doe',
                'Full-Stack Developer & UI/UX Designer',
                'Passionate about creating beautiful, functional, and user-centered digital experiences. I specialize in modern web technologies and love turning complex problems into simple, elegant solutions.',
                'john@example.com',
                'https://github.com',
                'https://linkedin.com',
                '/profile.jpg'
            WHERE NOT EXISTS (SELECT 1 FROM profiles);
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO skills (name, "order")
            SELECT s.name, s.ord
            FROM (VALUES
                ('React/Next.js', 0),
                ('Node.js/Express', 1),
                ('TypeScript', 2),
                ('Tailwind CSS', 3),
                ('MongoDB', 4),
                ('PostgreSQL', 5),
                ('AWS', 6),
                ('Docker', 7)
            ) AS s(name, ord)
            WHERE NOT EXISTS (SELECT 1 FROM skills);
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO projects (title, description, technologies, github, demo, featured, image, "order")
            SELECT p.title, p.description, p.technologies::jsonb, p.github, p.demo, p.featured, p.image, p.ord
            FROM (VALUES
                (
                    'E-Commerce Platform',
                    'A full-stack e-commerce solution built with Next.js, Node.js, and MongoDB. Features include user authentication, payment processing, and admin dashboard.',
                    '["Next.js", "Node.js", "MongoDB", "Stripe"]',
                    'https://github.com',
                    'https://demo.com',
                    true,
                    '/project1.jpg',
                    0
                ),
                (
                    'Task Management App',
                    'A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.',
                    '["React", "Express", "Socket.io", "PostgreSQL"]',
                    'https://github.com',
                    'https://demo.com',
                    true,
                    '/project2.jpg',
                    1
                )
            ) AS p(title, description, technologies, github, demo, featured, image, ord)
            WHERE NOT EXISTS (SELECT 1 FROM projects);
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM admin_users WHERE username = 'admin';")
            .await?;

        Ok(())
    }
}
