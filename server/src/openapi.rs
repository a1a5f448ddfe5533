//! Machine-readable API description.
//!
//! Served at `/openapi.json` for tooling and documentation; the document
//! is not part of the functional contract. With only four operations a
//! hand-written literal stays honest more cheaply than codegen would.

use axum::Json;
use serde_json::{json, Value};

pub async fn document() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Todo API",
            "version": "1.0.0"
        },
        "paths": {
            "/todos": {
                "get": {
                    "summary": "List all todos in insertion order",
                    "responses": {
                        "200": {
                            "description": "All stored todos",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Todo" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a todo",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Todo" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created; Location points at the new resource",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Todo" }
                                }
                            }
                        },
                        "422": {
                            "description": "Validation failed; maps field names to messages",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "additionalProperties": {
                                            "type": "array",
                                            "items": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/todos/{id}": {
                "get": {
                    "summary": "Fetch a todo by id",
                    "parameters": [{ "$ref": "#/components/parameters/TodoId" }],
                    "responses": {
                        "200": {
                            "description": "The matching todo",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Todo" }
                                }
                            }
                        },
                        "404": { "description": "No todo with that id" }
                    }
                },
                "delete": {
                    "summary": "Delete a todo by id (idempotent)",
                    "parameters": [{ "$ref": "#/components/parameters/TodoId" }],
                    "responses": {
                        "204": { "description": "Deleted, or nothing to delete" }
                    }
                }
            }
        },
        "components": {
            "parameters": {
                "TodoId": {
                    "name": "id",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "integer", "format": "int64" }
                }
            },
            "schemas": {
                "Todo": {
                    "type": "object",
                    "required": ["id", "name", "dueDate", "isCompleted"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "dueDate": { "type": "string", "format": "date-time" },
                        "isCompleted": { "type": "boolean" }
                    }
                }
            }
        }
    }))
}
