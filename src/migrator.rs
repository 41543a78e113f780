use anyhow::Result;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::{error, info};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_sellers_tables::Migration),
            Box::new(m20240101_000003_create_designers_table::Migration),
            Box::new(m20240101_000004_create_orders_tables::Migration),
            Box::new(m20240101_000005_create_return_requests_table::Migration),
            Box::new(m20240101_000006_create_contact_messages_table::Migration),
            Box::new(m20240101_000007_create_designer_portfolio_tables::Migration),
            Box::new(m20240101_000008_create_seller_delivery_details_table::Migration),
        ]
    }
}

mod m20240101_000001_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Users::Name).string().not_null())
                        .col(ColumnDef::new(Users::Email).string().not_null())
                        .col(ColumnDef::new(Users::Phone).string().null())
                        .col(
                            ColumnDef::new(Users::Credit)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
        Name,
        Email,
        Phone,
        Credit,
        CreatedAt,
    }
}

mod m20240101_000002_create_sellers_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_sellers_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sellers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sellers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Sellers::Name).string().not_null())
                        .col(ColumnDef::new(Sellers::Email).string().not_null())
                        .col(ColumnDef::new(Sellers::Phone).string().null())
                        .col(
                            ColumnDef::new(Sellers::IsVerified)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Sellers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SellerBusinessDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SellerBusinessDetails::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SellerBusinessDetails::SellerId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(SellerBusinessDetails::BusinessName)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SellerBusinessDetails::City).string().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_seller_business_details_seller_id")
                                .from(SellerBusinessDetails::Table, SellerBusinessDetails::SellerId)
                                .to(Sellers::Table, Sellers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SellerBankDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SellerBankDetails::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SellerBankDetails::SellerId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(SellerBankDetails::UpiId).string().null())
                        .col(
                            ColumnDef::new(SellerBankDetails::AccountNumber)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(SellerBankDetails::Ifsc).string().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_seller_bank_details_seller_id")
                                .from(SellerBankDetails::Table, SellerBankDetails::SellerId)
                                .to(Sellers::Table, Sellers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SellerBankDetails::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SellerBusinessDetails::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Sellers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Sellers {
        Table,
        Id,
        Name,
        Email,
        Phone,
        IsVerified,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum SellerBusinessDetails {
        Table,
        Id,
        SellerId,
        BusinessName,
        City,
    }

    #[derive(DeriveIden)]
    enum SellerBankDetails {
        Table,
        Id,
        SellerId,
        UpiId,
        AccountNumber,
        Ifsc,
    }
}

mod m20240101_000003_create_designers_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_designers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Designers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Designers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Designers::Fullname).string().not_null())
                        .col(ColumnDef::new(Designers::Email).string().not_null())
                        .col(ColumnDef::new(Designers::Mobile).string().null())
                        .col(ColumnDef::new(Designers::Location).string().null())
                        .col(ColumnDef::new(Designers::Experience).string().null())
                        .col(ColumnDef::new(Designers::Availability).string().null())
                        .col(
                            ColumnDef::new(Designers::IsVerified)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Designers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Designers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Designers {
        Table,
        Id,
        Fullname,
        Email,
        Mobile,
        Location,
        Experience,
        Availability,
        IsVerified,
        CreatedAt,
    }
}

mod m20240101_000004_create_orders_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_orders_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Orders::UserId).integer().not_null())
                        .col(
                            ColumnDef::new(Orders::GrandTotal)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Orders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_user_id")
                                .from(Orders::Table, Orders::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_created_at")
                        .table(Orders::Table)
                        .col(Orders::CreatedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderItems::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
                        .col(ColumnDef::new(OrderItems::SellerId).integer().not_null())
                        .col(ColumnDef::new(OrderItems::ProductName).string().not_null())
                        .col(
                            ColumnDef::new(OrderItems::Quantity)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(OrderItems::Price)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(OrderItems::Status).string().not_null())
                        .col(
                            ColumnDef::new(OrderItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_items_order_id")
                                .from(OrderItems::Table, OrderItems::OrderId)
                                .to(Orders::Table, Orders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_items_seller_id")
                                .from(OrderItems::Table, OrderItems::SellerId)
                                .to(Sellers::Table, Sellers::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_order_items_order_id")
                        .table(OrderItems::Table)
                        .col(OrderItems::OrderId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OrderItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Orders {
        Table,
        Id,
        UserId,
        GrandTotal,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum OrderItems {
        Table,
        Id,
        OrderId,
        SellerId,
        ProductName,
        Quantity,
        Price,
        Status,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Sellers {
        Table,
        Id,
    }
}

mod m20240101_000005_create_return_requests_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_return_requests_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ReturnRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ReturnRequests::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ReturnRequests::ProductName).string().not_null())
                        .col(ColumnDef::new(ReturnRequests::UserId).integer().not_null())
                        .col(ColumnDef::new(ReturnRequests::OrderItemId).integer().not_null())
                        .col(ColumnDef::new(ReturnRequests::Reason).string().not_null())
                        .col(
                            ColumnDef::new(ReturnRequests::SellerApprovalStatus)
                                .string_len(16)
                                .not_null()
                                .default("PENDING"),
                        )
                        .col(
                            ColumnDef::new(ReturnRequests::AdminApprovalStatus)
                                .string_len(16)
                                .not_null()
                                .default("PENDING"),
                        )
                        .col(
                            ColumnDef::new(ReturnRequests::AdminApprovedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(ReturnRequests::RefundMethod).string().null())
                        .col(
                            ColumnDef::new(ReturnRequests::RefundAmount)
                                .decimal()
                                .null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(ReturnRequests::RefundStatus)
                                .string_len(16)
                                .not_null()
                                .default("PENDING"),
                        )
                        .col(
                            ColumnDef::new(ReturnRequests::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_return_requests_user_id")
                                .from(ReturnRequests::Table, ReturnRequests::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_return_requests_order_item_id")
                                .from(ReturnRequests::Table, ReturnRequests::OrderItemId)
                                .to(OrderItems::Table, OrderItems::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_return_requests_user_id")
                        .table(ReturnRequests::Table)
                        .col(ReturnRequests::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ReturnRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ReturnRequests {
        Table,
        Id,
        ProductName,
        UserId,
        OrderItemId,
        Reason,
        SellerApprovalStatus,
        AdminApprovalStatus,
        AdminApprovedAt,
        RefundMethod,
        RefundAmount,
        RefundStatus,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum OrderItems {
        Table,
        Id,
    }
}

mod m20240101_000006_create_contact_messages_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_contact_messages_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ContactMessages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContactMessages::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                        .col(ColumnDef::new(ContactMessages::Email).string().not_null())
                        .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                        .col(
                            ColumnDef::new(ContactMessages::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ContactMessages {
        Table,
        Id,
        Name,
        Email,
        Message,
        CreatedAt,
    }
}

mod m20240101_000007_create_designer_portfolio_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_designer_portfolio_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DesignerWorks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DesignerWorks::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(DesignerWorks::DesignerId).integer().not_null())
                        .col(ColumnDef::new(DesignerWorks::Image).string().not_null())
                        .col(ColumnDef::new(DesignerWorks::Description).text().null())
                        .col(
                            ColumnDef::new(DesignerWorks::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_designer_works_designer_id")
                                .from(DesignerWorks::Table, DesignerWorks::DesignerId)
                                .to(Designers::Table, Designers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(DesignerHireRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DesignerHireRequests::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(DesignerHireRequests::DesignerId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DesignerHireRequests::FullName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DesignerHireRequests::WorkType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DesignerHireRequests::Budget).decimal().null())
                        .col(
                            ColumnDef::new(DesignerHireRequests::Status)
                                .string_len(16)
                                .not_null()
                                .default("pending"),
                        )
                        .col(
                            ColumnDef::new(DesignerHireRequests::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_designer_hire_requests_designer_id")
                                .from(DesignerHireRequests::Table, DesignerHireRequests::DesignerId)
                                .to(Designers::Table, Designers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(DesignerRatings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DesignerRatings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(DesignerRatings::HireRequestId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(DesignerRatings::Stars).integer().not_null())
                        .col(
                            ColumnDef::new(DesignerRatings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_designer_ratings_hire_request_id")
                                .from(DesignerRatings::Table, DesignerRatings::HireRequestId)
                                .to(DesignerHireRequests::Table, DesignerHireRequests::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DesignerRatings::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(DesignerHireRequests::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(DesignerWorks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum DesignerWorks {
        Table,
        Id,
        DesignerId,
        Image,
        Description,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum DesignerHireRequests {
        Table,
        Id,
        DesignerId,
        FullName,
        WorkType,
        Budget,
        Status,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum DesignerRatings {
        Table,
        Id,
        HireRequestId,
        Stars,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Designers {
        Table,
        Id,
    }
}

mod m20240101_000008_create_seller_delivery_details_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_seller_delivery_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SellerDeliveryDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SellerDeliveryDetails::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SellerDeliveryDetails::SellerId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(SellerDeliveryDetails::DeliveryTimeMin)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SellerDeliveryDetails::DeliveryTimeMax)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SellerDeliveryDetails::ShippingCharge)
                                .decimal()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SellerDeliveryDetails::InstallationAvailable)
                                .string()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_seller_delivery_details_seller_id")
                                .from(SellerDeliveryDetails::Table, SellerDeliveryDetails::SellerId)
                                .to(Sellers::Table, Sellers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SellerDeliveryDetails::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SellerDeliveryDetails {
        Table,
        Id,
        SellerId,
        DeliveryTimeMin,
        DeliveryTimeMax,
        ShippingCharge,
        InstallationAvailable,
    }

    #[derive(DeriveIden)]
    enum Sellers {
        Table,
        Id,
    }
}

/// Connects to `db_url` and applies every pending migration.
pub async fn run_migration(db_url: &str) -> Result<()> {
    info!("Setting up database connection for migrations");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    info!("Running database migrations");

    match Migrator::up(&db, None).await {
        Ok(_) => {
            info!("Migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Migration failed: {}", e);
            Err(e.into())
        }
    }
}
